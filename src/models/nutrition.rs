//! Shared nutrient profile
//!
//! Used for ingredient per-100g values, mixture results and drink totals.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Energy and macronutrients
///
/// As an ingredient's `per100` this is "amount per 100 g"; as a drink total
/// it is the absolute amount in the serving. Arithmetic is component-wise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    pub kcal: f64,
    pub protein: f64, // grams
    pub fat: f64,     // grams
    pub carbs: f64,   // grams
}

impl NutrientProfile {
    pub const fn new(kcal: f64, protein: f64, fat: f64, carbs: f64) -> Self {
        Self {
            kcal,
            protein,
            fat,
            carbs,
        }
    }

    /// All zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Multiply every component by `multiplier`
    pub fn multiply(&self, multiplier: f64) -> Self {
        Self {
            kcal: self.kcal * multiplier,
            protein: self.protein * multiplier,
            fat: self.fat * multiplier,
            carbs: self.carbs * multiplier,
        }
    }

    /// Absolute contribution of `weight_grams` of a food with this per-100g profile
    pub fn scale(&self, weight_grams: f64) -> Self {
        self.multiply(weight_grams / 100.0)
    }

    /// Component-wise sum
    pub fn sum(&self, other: &NutrientProfile) -> Self {
        Self {
            kcal: self.kcal + other.kcal,
            protein: self.protein + other.protein,
            fat: self.fat + other.fat,
            carbs: self.carbs + other.carbs,
        }
    }

    /// Convert absolute totals for `total_weight` grams into a per-100g profile
    ///
    /// Refuses a non-positive or non-finite weight instead of dividing by it.
    pub fn normalize_to_100(&self, total_weight: f64) -> Result<Self, ValidationError> {
        if !total_weight.is_finite() || total_weight <= 0.0 {
            return Err(ValidationError::NonPositiveTotalWeight);
        }
        Ok(self.multiply(100.0 / total_weight))
    }

    /// Whether every component is a finite number
    pub fn is_finite(&self) -> bool {
        self.kcal.is_finite() && self.protein.is_finite() && self.fat.is_finite() && self.carbs.is_finite()
    }

    /// Same profile with every value rounded to one decimal place
    pub fn rounded(&self) -> Self {
        fn round1(v: f64) -> f64 {
            (v * 10.0).round() / 10.0
        }
        Self {
            kcal: round1(self.kcal),
            protein: round1(self.protein),
            fat: round1(self.fat),
            carbs: round1(self.carbs),
        }
    }
}

impl std::ops::Add for NutrientProfile {
    type Output = NutrientProfile;

    fn add(self, other: NutrientProfile) -> NutrientProfile {
        NutrientProfile::sum(&self, &other)
    }
}

impl std::ops::Mul<f64> for NutrientProfile {
    type Output = NutrientProfile;

    fn mul(self, multiplier: f64) -> NutrientProfile {
        self.multiply(multiplier)
    }
}

impl std::iter::Sum for NutrientProfile {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientProfile::zero(), |acc, n| acc + n)
    }
}
