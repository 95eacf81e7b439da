use{
    crate::error::SimError,
    super::*
};

/// Mean weight of the inbound routes of `idx`, `None` without inbound routes
pub fn mean_inbound_weight(graph: &RouteGraph, idx: petgraph::graph::NodeIndex) -> Option<f64>
{
    let (sum, count) = graph.in_routes(idx)
        .fold((0.0, 0_usize), |(sum, count), route| (sum + route.weight, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Infection step. Every node that is susceptible at the start of the step
/// becomes infected if `prob_cutoff_rate` exceeds the mean weight of its
/// inbound routes. Nodes without inbound routes stay susceptible.
///
/// Returns the number of newly infected nodes.
pub fn simulate_infection(graph: &mut RouteGraph, prob_cutoff_rate: f64) -> Result<usize, SimError>
{
    log::debug!("run infection cycle");
    let susceptible = graph.nodes_with_status(InfectionState::Susceptible);

    // decide on the snapshot first, then apply
    let snapshot: &RouteGraph = graph;
    let newly_infected: Vec<_> = susceptible.into_iter()
        .filter(
            |&idx|
            match mean_inbound_weight(snapshot, idx){
                Some(node_infection_prob) => prob_cutoff_rate > node_infection_prob,
                None => false
            }
        ).collect();

    for &idx in newly_infected.iter()
    {
        graph.set_status(idx, InfectionState::Infected)?;
    }
    log::debug!("{} nodes infected during this step", newly_infected.len());
    Ok(newly_infected.len())
}
