use {
    super::parser::*,
    serde_json::Value,
    std::path::PathBuf,
    crate::sir_model::*,
    crate::error::SimError,
};

pub fn execute_simulation(param: SimulateParams, json: Value) -> Result<(), SimError>
{
    log::debug!("parameters: {}", json);
    let metrics = run_simulation(&param)?;
    let name = param.metrics_name();
    log::info!("wrote {} rows to {}", metrics.len(), name);
    Ok(())
}

/// Builds the graph, seeds the infection and runs all days.
/// Returns the metrics that were written.
pub fn run_simulation(param: &SimulateParams) -> Result<Vec<CycleMetrics>, SimError>
{
    param.validate()?;
    let graph = param.graph.build(param.initial_weight, param.graph_seed)?;
    let properties = graph.properties();
    log::info!(
        "graph has {} nodes and {} edges",
        properties.node_count,
        properties.edge_count
    );

    let mut model = EpidemicSimulation::from_graph(graph, param.cutoff, param.sir_seed);
    model.infect_nodes(param.initial_infected)?;

    let mut writer = SimWriter::new(
        param.metrics_name(),
        param.export_json.as_ref().map(PathBuf::from)
    )?;
    let metrics = model.run(param.days, &mut writer)?;
    writer.flush()?;
    Ok(metrics)
}
