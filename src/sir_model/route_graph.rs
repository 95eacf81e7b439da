use{
    std::collections::HashMap,
    petgraph::{
        graph::{DiGraph, NodeIndex, EdgeIndex},
        visit::EdgeRef,
        Direction
    },
    rand::{Rng, seq::index},
    serde::{Serialize, Deserialize},
    crate::error::SimError,
    super::*
};

#[derive(Clone, Debug, PartialEq)]
pub struct Airport{
    pub name: String,
    pub infection_status: InfectionState
}

/// Directed route carrying the current transmission probability.
/// `from_node` and `to_node` mirror the endpoint names.
#[derive(Clone, Debug, PartialEq)]
pub struct Route{
    pub weight: f64,
    pub from_node: String,
    pub to_node: String
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphProperties{
    pub node_count: usize,
    pub edge_count: usize
}

/// Directed graph of airports and routes, the state shared by all
/// components of a simulation run.
#[derive(Clone, Debug, Default)]
pub struct RouteGraph{
    graph: DiGraph<Airport, Route>,
    index: HashMap<String, NodeIndex>
}

impl RouteGraph{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Returns the existing index if the airport is already known
    pub fn add_airport(&mut self, name: &str) -> NodeIndex
    {
        if let Some(&idx) = self.index.get(name){
            return idx;
        }
        let idx = self.graph.add_node(
            Airport{
                name: name.to_owned(),
                infection_status: InfectionState::Susceptible
            }
        );
        self.index.insert(name.to_owned(), idx);
        idx
    }

    /// Adds the route `from -> to`. Adding the same pair twice only
    /// overwrites the weight.
    pub fn add_route(&mut self, from: &str, to: &str, weight: f64) -> EdgeIndex
    {
        let from_idx = self.add_airport(from);
        let to_idx = self.add_airport(to);
        match self.graph.find_edge(from_idx, to_idx){
            Some(e) => {
                self.graph[e].weight = weight;
                e
            },
            None => self.graph.add_edge(
                from_idx,
                to_idx,
                Route{
                    weight,
                    from_node: from.to_owned(),
                    to_node: to.to_owned()
                }
            )
        }
    }

    pub fn index_of(&self, name: &str) -> Result<NodeIndex, SimError>
    {
        self.index.get(name)
            .copied()
            .ok_or_else(|| SimError::UnknownAirport(name.to_owned()))
    }

    pub fn airport(&self, idx: NodeIndex) -> Result<&Airport, SimError>
    {
        self.graph.node_weight(idx)
            .ok_or(SimError::MissingNode(idx.index()))
    }

    pub fn status(&self, idx: NodeIndex) -> Result<InfectionState, SimError>
    {
        self.airport(idx).map(|a| a.infection_status)
    }

    pub fn set_status(&mut self, idx: NodeIndex, state: InfectionState) -> Result<(), SimError>
    {
        let airport = self.graph.node_weight_mut(idx)
            .ok_or(SimError::MissingNode(idx.index()))?;
        airport.infection_status = state;
        Ok(())
    }

    pub fn route(&self, from: &str, to: &str) -> Option<&Route>
    {
        let from_idx = self.index.get(from)?;
        let to_idx = self.index.get(to)?;
        self.graph.find_edge(*from_idx, *to_idx)
            .map(|e| &self.graph[e])
    }

    pub fn in_routes(&self, idx: NodeIndex) -> impl Iterator<Item=&Route> + '_
    {
        self.graph.edges_directed(idx, Direction::Incoming)
            .map(|e| e.weight())
    }

    pub fn out_route_ids(&self, idx: NodeIndex) -> Vec<EdgeIndex>
    {
        self.graph.edges_directed(idx, Direction::Outgoing)
            .map(|e| e.id())
            .collect()
    }

    pub fn route_mut(&mut self, e: EdgeIndex) -> Option<&mut Route>
    {
        self.graph.edge_weight_mut(e)
    }

    pub fn node_indices(&self) -> impl Iterator<Item=NodeIndex> + '_
    {
        self.graph.node_indices()
    }

    pub fn airports(&self) -> impl Iterator<Item=&Airport> + '_
    {
        self.graph.node_weights()
    }

    /// Iterates `(source, target, route)` in insertion order
    pub fn routes(&self) -> impl Iterator<Item=(NodeIndex, NodeIndex, &Route)> + '_
    {
        self.graph.edge_references()
            .map(|e| (e.source(), e.target(), e.weight()))
    }

    pub fn node_count(&self) -> usize
    {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize
    {
        self.graph.edge_count()
    }

    pub fn nodes_with_status(&self, state: InfectionState) -> Vec<NodeIndex>
    {
        self.graph.node_indices()
            .filter(|&idx| self.graph[idx].infection_status == state)
            .collect()
    }

    pub fn status_counts(&self) -> StatusCounts
    {
        let mut counts = StatusCounts::default();
        self.airports()
            .for_each(|a| counts.add(a.infection_status));
        counts
    }

    pub fn properties(&self) -> GraphProperties
    {
        GraphProperties{
            node_count: self.node_count(),
            edge_count: self.edge_count()
        }
    }

    /// Marks `count` distinct, uniformly chosen nodes as infected.
    /// Returns the names of the seeded nodes.
    pub fn infect_nodes<R: Rng>(&mut self, count: usize, rng: &mut R) -> Result<Vec<String>, SimError>
    {
        let available = self.node_count();
        if count > available {
            return Err(
                SimError::TooManyInitialInfected{
                    requested: count,
                    available
                }
            );
        }
        let mut names = Vec::with_capacity(count);
        for i in index::sample(rng, available, count).into_iter()
        {
            let airport = &mut self.graph[NodeIndex::new(i)];
            airport.infection_status = InfectionState::Infected;
            names.push(airport.name.clone());
        }
        log::debug!("seeded infection at {:?}", names);
        Ok(names)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use rand_pcg::Pcg64;
    use rand::SeedableRng;

    fn triangle() -> RouteGraph
    {
        let mut g = RouteGraph::new();
        g.add_route("A", "B", 0.1);
        g.add_route("B", "C", 0.1);
        g.add_route("C", "A", 0.1);
        g
    }

    #[test]
    fn nodes_are_created_on_first_reference()
    {
        let g = triangle();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert!(g.airports().all(|a| a.infection_status.sus_check()));
        let route = g.route("A", "B").unwrap();
        assert_eq!(route.from_node, "A");
        assert_eq!(route.to_node, "B");
        assert!(g.route("B", "A").is_none());
    }

    #[test]
    fn duplicate_route_overwrites_weight()
    {
        let mut g = triangle();
        g.add_route("A", "B", 0.3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.route("A", "B").unwrap().weight, 0.3);
    }

    #[test]
    fn directed_adjacency()
    {
        let g = triangle();
        let b = g.index_of("B").unwrap();
        let inbound: Vec<_> = g.in_routes(b).collect();
        assert_eq!(inbound.len(), 1);
        assert_eq!(inbound[0].from_node, "A");
        assert_eq!(g.out_route_ids(b).len(), 1);
        assert!(matches!(g.index_of("Z"), Err(SimError::UnknownAirport(_))));
    }

    #[test]
    fn missing_node_is_an_error()
    {
        let g = triangle();
        let err = g.status(NodeIndex::new(17)).unwrap_err();
        assert!(matches!(err, SimError::MissingNode(17)));
    }

    #[test]
    fn infect_nodes_picks_distinct_nodes()
    {
        let mut g = RouteGraph::new();
        for i in 0..50 {
            g.add_route(&i.to_string(), &((i + 1) % 50).to_string(), 0.1);
        }
        let mut rng = Pcg64::seed_from_u64(3);
        let names = g.infect_nodes(20, &mut rng).unwrap();
        let counts = g.status_counts();
        assert_eq!(counts.infected, 20);
        assert_eq!(counts.susceptible, 30);
        let mut dedup = names.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), 20);

        let err = g.infect_nodes(51, &mut rng).unwrap_err();
        assert!(matches!(err, SimError::TooManyInitialInfected{requested: 51, available: 50}));
    }
}
