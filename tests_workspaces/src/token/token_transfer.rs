use colored::Colorize;
use serde_json::json;
use workspaces::prelude::*;

const TOKEN_WASM_FILEPATH: &str = "../out/token.wasm";
const TOTAL_SUPPLY: u128 = 10_000;

async fn balance_of<T>(
    worker: &workspaces::Worker<T>,
    contract: &workspaces::Contract,
    account_id: impl std::fmt::Display,
) -> anyhow::Result<u128>
where
    T: std::marker::Sync
        + workspaces::network::NetworkInfo
        + std::marker::Send
        + workspaces::network::NetworkClient,
{
    let balance = contract
        .view(
            worker,
            "ft_balance_of",
            json!({ "account_id": account_id.to_string() }).to_string().into_bytes(),
        )
        .await?
        .json::<String>()?;
    Ok(balance.parse::<u128>()?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let worker = workspaces::sandbox().await?;

    let token_wasm = std::fs::read(TOKEN_WASM_FILEPATH)?;
    let token_contract: workspaces::Contract = worker.dev_deploy(&token_wasm).await?;
    println!("TOKEN accountId: {}", token_contract.id());

    let owner = worker.dev_create_account().await?;
    let addr1 = worker.dev_create_account().await?;
    let addr2 = worker.dev_create_account().await?;

    // Initialize Token Contract, the caller becomes the owner
    let outcome = owner
        .call(&worker, token_contract.id(), "new_default_meta")
        .args_json(json!({
            "total_supply": TOTAL_SUPPLY.to_string(),
        }))?
        .transact()
        .await?;
    assert!(
        outcome.is_success(),
        "    token initialization failed: {:#?} {}",
        outcome,
        "FAILED".red()
    );
    println!("    token contract initialized");

    /*
    CASE #01: Deployment should assign the total supply of tokens to the owner
    */
    println!("{}: Total supply assigned to the owner:", "token case #01".cyan());
    let total_supply = token_contract
        .view(&worker, "ft_total_supply", json!({}).to_string().into_bytes())
        .await?
        .json::<String>()?;
    let owner_balance = balance_of(&worker, &token_contract, owner.id()).await?;
    assert_eq!(total_supply, owner_balance.to_string());
    println!(" - {}", "PASSED".green());

    /*
    CASE #02: Should transfer tokens between accounts
    */
    println!("{}: Transfer tokens between accounts:", "token case #02".cyan());
    let outcome = owner
        .call(&worker, token_contract.id(), "ft_transfer")
        .args_json(json!({
            "receiver_id": addr1.id(),
            "amount": "50",
        }))?
        .transact()
        .await?;
    assert!(outcome.is_success(), "Transfer to addr1 failed: {:#?}", outcome);
    assert_eq!(balance_of(&worker, &token_contract, addr1.id()).await?, 50);

    let outcome = addr1
        .call(&worker, token_contract.id(), "ft_transfer")
        .args_json(json!({
            "receiver_id": addr2.id(),
            "amount": "50",
        }))?
        .transact()
        .await?;
    assert!(outcome.is_success(), "Transfer to addr2 failed: {:#?}", outcome);
    assert_eq!(balance_of(&worker, &token_contract, addr2.id()).await?, 50);
    assert_eq!(balance_of(&worker, &token_contract, addr1.id()).await?, 0);
    println!(
        "    owner balance: {}",
        balance_of(&worker, &token_contract, owner.id()).await?
    );
    println!(" - {}", "PASSED".green());

    /*
    CASE #03: Should fail if sender doesn't have enough tokens
    */
    println!("{}: Sender without enough tokens:", "token case #03".cyan());
    let outcome = addr1
        .call(&worker, token_contract.id(), "ft_transfer")
        .args_json(json!({
            "receiver_id": owner.id(),
            "amount": "1",
        }))?
        .transact()
        .await;
    match outcome {
        Ok(details) => assert!(
            !details.is_success(),
            "Succeeded even though it should have panicked!"
        ),
        Err(err) => assert!(
            format!("{:?}", err).contains("Not enough tokens"),
            "Unexpected failure: {:?}",
            err
        ),
    }
    assert_eq!(
        balance_of(&worker, &token_contract, owner.id()).await?,
        TOTAL_SUPPLY - 50
    );
    let events_count = token_contract
        .view(&worker, "ft_transfer_events_count", json!({}).to_string().into_bytes())
        .await?
        .json::<String>()?;
    assert_eq!(events_count, "2");
    println!(" - {}", "PASSED".green());

    Ok(())
}
