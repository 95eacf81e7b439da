use{
    rand::Rng,
    crate::error::SimError,
    super::*
};

/// Inclusive range the weight of an outbound route is drawn from
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightRange{
    pub from: f64,
    pub to: f64
}

impl WeightRange{
    pub const INFECTED: WeightRange = WeightRange{from: 0.50, to: 0.75};
    pub const CURED: WeightRange = WeightRange{from: 0.25, to: 0.49};
    pub const SUSCEPTIBLE: WeightRange = WeightRange{from: 0.02, to: 0.49};

    pub fn for_state(state: InfectionState) -> Self
    {
        match state{
            InfectionState::Infected => Self::INFECTED,
            InfectionState::Cured => Self::CURED,
            InfectionState::Susceptible => Self::SUSCEPTIBLE
        }
    }

    pub fn contains(&self, weight: f64) -> bool
    {
        (self.from..=self.to).contains(&weight)
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64
    {
        rng.gen_range(self.from..=self.to)
    }
}

/// Draws a fresh weight for every route, using the range given by the
/// current state of the route's source airport.
pub fn recal_edge_weights<R: Rng>(graph: &mut RouteGraph, rng: &mut R) -> Result<(), SimError>
{
    let nodes: Vec<_> = graph.node_indices().collect();
    for idx in nodes
    {
        let range = WeightRange::for_state(graph.status(idx)?);
        for e in graph.out_route_ids(idx)
        {
            let weight = range.sample(rng);
            // ids were just read from the graph
            if let Some(route) = graph.route_mut(e){
                route.weight = weight;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests
{
    use super::*;
    use rand_pcg::Pcg64;
    use rand::SeedableRng;

    #[test]
    fn weights_follow_source_state()
    {
        let mut g = RouteGraph::new();
        for i in 0..30 {
            for j in 0..30 {
                if i != j && (i + j) % 3 == 0 {
                    g.add_route(&i.to_string(), &j.to_string(), 0.1);
                }
            }
        }
        let mut rng = Pcg64::seed_from_u64(8);
        g.infect_nodes(10, &mut rng).unwrap();
        let cured = g.nodes_with_status(InfectionState::Infected)[0];
        g.set_status(cured, InfectionState::Cured).unwrap();

        for _ in 0..5
        {
            recal_edge_weights(&mut g, &mut rng).unwrap();
            for (source, _, route) in g.routes()
            {
                let state = g.status(source).unwrap();
                assert!((0.0..=1.0).contains(&route.weight));
                assert!(
                    WeightRange::for_state(state).contains(route.weight),
                    "{} route with weight {}",
                    state,
                    route.weight
                );
            }
        }
    }

    #[test]
    fn weights_are_redrawn_each_cycle()
    {
        let mut g = RouteGraph::new();
        g.add_route("A", "B", 0.1);
        let mut rng = Pcg64::seed_from_u64(1);
        recal_edge_weights(&mut g, &mut rng).unwrap();
        let first = g.route("A", "B").unwrap().weight;
        recal_edge_weights(&mut g, &mut rng).unwrap();
        let second = g.route("A", "B").unwrap().weight;
        assert_ne!(first, 0.1);
        assert_ne!(first, second);
    }
}
