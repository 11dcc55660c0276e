use crate::{
    calculate::{
        model::{ActivityRequest, Calculation, SpendRequest},
        wire::CalculationNode,
    },
    core::{RetryConfig, VsmeClient, VsmeError, net},
};

pub(super) async fn post_activity(
    client: &VsmeClient,
    req: &ActivityRequest,
    retry_override: Option<&RetryConfig>,
) -> Result<Calculation, VsmeError> {
    let url = client.endpoint("calculate/emissions")?;
    let resp = client
        .send_with_retry(client.http().post(url).json(req), retry_override)
        .await?;
    let node: CalculationNode = net::get_json(resp, "calculate_emissions", &req.activity_type).await?;
    node.into_model()
        .ok_or_else(|| VsmeError::Data("emissions_kg_co2e missing from calculator response".into()))
}

pub(super) async fn post_spend(
    client: &VsmeClient,
    req: &SpendRequest,
    retry_override: Option<&RetryConfig>,
) -> Result<Calculation, VsmeError> {
    let url = client.endpoint("calculate/spend")?;
    let resp = client
        .send_with_retry(client.http().post(url).json(req), retry_override)
        .await?;
    let node: CalculationNode = net::get_json(resp, "calculate_spend", &req.sub_category).await?;
    node.into_model()
        .ok_or_else(|| VsmeError::Data("emissions_kg_co2e missing from calculator response".into()))
}
