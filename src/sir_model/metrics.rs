use{
    serde::{Serialize, Deserialize},
    super::*
};

/// One record per simulated day
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CycleMetrics{
    pub day: usize,
    pub susceptible: usize,
    pub infected: usize,
    pub cured: usize,
    /// `None` if no infected node has an inbound route
    pub avg_inbound_weight_infected: Option<f64>
}

impl CycleMetrics{
    pub fn total(&self) -> usize
    {
        self.susceptible + self.infected + self.cured
    }
}

/// Mean weight over all inbound routes of infected nodes
pub fn find_avg_edge_weights(graph: &RouteGraph) -> Option<f64>
{
    let mut total_weight = 0.0;
    let mut counter = 0_usize;
    for idx in graph.nodes_with_status(InfectionState::Infected)
    {
        for route in graph.in_routes(idx)
        {
            total_weight += route.weight;
            counter += 1;
        }
    }
    if counter == 0 {
        None
    } else {
        Some(total_weight / counter as f64)
    }
}

/// Read only, calling it twice on the same graph gives the same record
pub fn compute_metrics(graph: &RouteGraph, day: usize) -> CycleMetrics
{
    let counts = graph.status_counts();
    CycleMetrics{
        day,
        susceptible: counts.susceptible,
        infected: counts.infected,
        cured: counts.cured,
        avg_inbound_weight_infected: find_avg_edge_weights(graph)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn averages_inbound_routes_of_infected()
    {
        let mut g = RouteGraph::new();
        g.add_route("A", "B", 0.2);
        g.add_route("C", "B", 0.4);
        g.add_route("B", "C", 0.9);
        g.add_route("B", "A", 0.6);
        let b = g.index_of("B").unwrap();
        let a = g.index_of("A").unwrap();
        g.set_status(b, InfectionState::Infected).unwrap();
        g.set_status(a, InfectionState::Infected).unwrap();

        let m = compute_metrics(&g, 3);
        assert_eq!(m.day, 3);
        assert_eq!((m.susceptible, m.infected, m.cured), (1, 2, 0));
        let avg = m.avg_inbound_weight_infected.unwrap();
        assert!((avg - 1.2 / 3.0).abs() < 1e-12);
        assert_eq!(m, compute_metrics(&g, 3));
    }

    #[test]
    fn undefined_average_without_infected()
    {
        let mut g = RouteGraph::new();
        g.add_route("A", "B", 0.2);
        let m = compute_metrics(&g, 1);
        assert_eq!(m.avg_inbound_weight_infected, None);
        assert_eq!(m.total(), 2);

        // infected, but nothing flies in
        g.set_status(g.index_of("A").unwrap(), InfectionState::Infected).unwrap();
        assert_eq!(find_avg_edge_weights(&g), None);
    }
}
