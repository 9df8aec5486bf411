use askgate_llm::ModelHandle;
use colored::Colorize;

pub async fn run(model: ModelHandle, question: &str) -> anyhow::Result<()> {
    let Some(client) = model.get() else {
        anyhow::bail!(
            "LLM model was not initialized: {}",
            model.unavailable_reason().unwrap_or("unknown reason")
        );
    };

    match client.generate(question).await {
        Ok(answer) => {
            println!("{}", answer);
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }

    Ok(())
}
