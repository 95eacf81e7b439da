use {
    super::parser::*,
    crate::sir_model::*,
    crate::error::SimError,
};

pub fn graph_properties(param: &PropertiesParams) -> Result<GraphProperties, SimError>
{
    let graph = param.graph.build(param.initial_weight, param.graph_seed)?;
    Ok(graph.properties())
}

pub fn execute_properties(param: PropertiesParams) -> Result<(), SimError>
{
    let properties = graph_properties(&param)?;
    log::info!("Analyzing the graph {}", param.graph.name());
    serde_json::to_writer_pretty(std::io::stdout(), &properties)?;
    println!();
    Ok(())
}
