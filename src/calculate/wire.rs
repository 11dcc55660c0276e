use serde::Deserialize;

use super::model::Calculation;

#[derive(Deserialize)]
pub(crate) struct CalculationNode {
    pub(crate) emissions_kg_co2e: Option<f64>,
    pub(crate) emissions_tonnes_co2e: Option<f64>,
    pub(crate) emission_factor: Option<f64>,
    pub(crate) unit: Option<String>,
    pub(crate) scope: Option<String>,
}

impl CalculationNode {
    pub(crate) fn into_model(self) -> Option<Calculation> {
        let kg = self.emissions_kg_co2e.filter(|v| v.is_finite())?;
        Some(Calculation {
            emissions_kg_co2e: kg,
            emissions_tonnes_co2e: self.emissions_tonnes_co2e,
            emission_factor: self.emission_factor,
            unit: self.unit,
            scope: self.scope,
        })
    }
}
