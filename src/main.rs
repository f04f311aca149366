use anyhow::Result;
use lingraph::dbpedia;
use lingraph::render::{Digraph, Engine, OutputFormat};
use lingraph::sparql::EndpointConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = EndpointConfig::default();

    // Full influence graph across all programming languages
    let influence = dbpedia::influenced_by(&config).await?;
    let mut dot = Digraph::new("output/programming").with_format(OutputFormat::Svg);
    dot.populate_weighted(&influence);
    let saved = dot.save(None)?;
    println!("{} saved.", saved.display());

    // Neighborhood of one language
    let java = dbpedia::influenced_and_influenced_by_for(&config, "Java (programming language)").await?;
    let mut dot = Digraph::new("output/java")
        .with_format(OutputFormat::Svg)
        .with_engine(Engine::Dot);
    dot.populate_weighted(&java);
    let saved = dot.save(None)?;
    println!("{} saved.", saved.display());

    Ok(())
}
