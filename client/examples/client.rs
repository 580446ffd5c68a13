use rag_client::{BackendService, ClientConfig, ClientState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = ClientConfig::from_env();
    let mut state = ClientState::new(config.base_url);
    let backend = BackendService::new();

    println!("🔍 Testing RAG Document Client against {}", state.base_url);

    // Upload the document named on the command line, if any
    if let Some(path) = std::env::args().nth(1) {
        println!("\n📚 Upload:");
        state.select_path(&path).await?;
        println!("{}", state.upload(&backend).await);
    }

    println!("\n🔍 Query Test:");
    state.set_query("What are the main topics and findings discussed in these documents?");
    if let Some(notice) = state.submit_query(&backend).await {
        println!("{}", notice);
        return Ok(());
    }

    for row in &state.results {
        println!("{}", serde_json::to_string_pretty(row)?);
    }

    println!("\n✅ Client test completed!");
    Ok(())
}
