use experiment_http::{EvaluationClient, UserIdentity};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = EvaluationClient::from_env().map_err(anyhow::Error::msg)?;

    let user = UserIdentity::new()
        .with_user_id("demo-user")
        .with_device_id("demo-device")
        .with_user_property("plan", "premium");

    let variants = client.fetch(&user).await?;

    for (flag, variant) in variants {
        println!("{flag}: {} (payload: {:?})", variant.value, variant.payload);
    }

    Ok(())
}
