use{
    rand::{Rng, seq::SliceRandom},
    crate::error::SimError,
    super::*
};

/// Largest number of nodes a single curing step may cure
pub fn max_cured(infected_count: usize) -> usize
{
    infected_count / 3
}

/// Cures `k` distinct infected nodes, with `k` uniform in `[0, infected/3]`.
/// Returns `k`.
pub fn simulate_curing<R: Rng>(graph: &mut RouteGraph, rng: &mut R) -> Result<usize, SimError>
{
    let infected = graph.nodes_with_status(InfectionState::Infected);
    log::debug!("infected before curing: {}", infected.len());
    if infected.is_empty() {
        return Ok(0);
    }

    let node_count = rng.gen_range(0..=max_cured(infected.len()));
    let chosen: Vec<_> = infected.choose_multiple(rng, node_count)
        .copied()
        .collect();
    for idx in chosen
    {
        graph.set_status(idx, InfectionState::Cured)?;
    }
    log::debug!("infected after curing: {}", infected.len() - node_count);
    Ok(node_count)
}
