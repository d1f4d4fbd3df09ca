// SPDX-License-Identifier: MPL-2.0
//! Recognition request and result types.
//!
//! A [`RecognitionResult`] only exists when the service returned a complete
//! payload: a non-empty food name and at least one nutrition entry. The
//! constructor enforces that, so partially valid responses can never be
//! stored.

use std::fmt;

/// Payload sent to the recognition service.
///
/// Built fresh for every submission and consumed by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionRequest {
    image_base64: String,
}

impl RecognitionRequest {
    #[must_use]
    pub fn new(image_base64: String) -> Self {
        Self { image_base64 }
    }

    /// Base64 text of the encoded JPEG.
    #[must_use]
    pub fn image_base64(&self) -> &str {
        &self.image_base64
    }

    /// Size of the encoded image in bytes, as sent on the wire.
    #[must_use]
    pub fn payload_bytes(&self) -> usize {
        self.image_base64.len()
    }
}

/// Value of a nutrient, as reported by the service.
#[derive(Debug, Clone, PartialEq)]
pub enum NutrientValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for NutrientValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NutrientValue::Number(value) => {
                if value.fract() == 0.0 && value.abs() < 1e15 {
                    write!(f, "{value:.0}")
                } else {
                    write!(f, "{value}")
                }
            }
            NutrientValue::Text(text) => f.write_str(text),
        }
    }
}

/// One line of the nutrition panel.
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionEntry {
    pub name: String,
    pub value: NutrientValue,
}

impl NutritionEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, value: NutrientValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Reason a result could not be built from otherwise well-formed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncompleteResult {
    MissingFoodName,
    MissingNutritionInfo,
}

/// Food name and nutrition facts returned by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionResult {
    food_name: String,
    nutrition_info: Vec<NutritionEntry>,
}

impl RecognitionResult {
    /// Builds a result, rejecting blank food names and empty nutrition lists.
    ///
    /// # Errors
    ///
    /// Returns which part of the payload is missing.
    pub fn new(
        food_name: impl Into<String>,
        nutrition_info: Vec<NutritionEntry>,
    ) -> Result<Self, IncompleteResult> {
        let food_name = food_name.into();
        if food_name.trim().is_empty() {
            return Err(IncompleteResult::MissingFoodName);
        }
        if nutrition_info.is_empty() {
            return Err(IncompleteResult::MissingNutritionInfo);
        }
        Ok(Self {
            food_name,
            nutrition_info,
        })
    }

    #[must_use]
    pub fn food_name(&self) -> &str {
        &self.food_name
    }

    /// Nutrition entries in the order the service sent them.
    #[must_use]
    pub fn nutrition_info(&self) -> &[NutritionEntry] {
        &self.nutrition_info
    }
}
