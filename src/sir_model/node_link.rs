use{
    std::{
        fs::File,
        io::{BufWriter, Write},
        path::Path
    },
    serde::{Serialize, Deserialize},
    serde_json::{Map, Value},
    crate::error::SimError,
    super::*
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeEntry{
    pub infection_status: InfectionState,
    pub id: String
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinkEntry{
    pub weight: f64,
    pub from_node: String,
    pub to_node: String,
    pub source: String,
    pub target: String
}

/// Node-link representation of a route graph
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkData{
    pub directed: bool,
    pub multigraph: bool,
    pub graph: Map<String, Value>,
    pub nodes: Vec<NodeEntry>,
    pub links: Vec<LinkEntry>
}

impl From<&RouteGraph> for NodeLinkData{
    fn from(graph: &RouteGraph) -> Self
    {
        let nodes = graph.airports()
            .map(
                |a|
                NodeEntry{
                    infection_status: a.infection_status,
                    id: a.name.clone()
                }
            ).collect();
        let links = graph.routes()
            .map(
                |(_, _, route)|
                LinkEntry{
                    weight: route.weight,
                    from_node: route.from_node.clone(),
                    to_node: route.to_node.clone(),
                    source: route.from_node.clone(),
                    target: route.to_node.clone()
                }
            ).collect();
        Self{
            directed: true,
            multigraph: false,
            graph: Map::new(),
            nodes,
            links
        }
    }
}

/// Overwrites `path` with the current state of the graph
pub fn write_graph_json<P: AsRef<Path>>(graph: &RouteGraph, path: P) -> Result<(), SimError>
{
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| SimError::io(path, e))?;
    let mut buf = BufWriter::new(file);
    serde_json::to_writer(&mut buf, &NodeLinkData::from(graph))?;
    buf.flush()
        .map_err(|e| SimError::io(path, e))
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn exports_current_state()
    {
        let mut g = RouteGraph::new();
        g.add_route("JFK", "LHR", 0.6);
        g.add_route("LHR", "CDG", 0.3);
        g.set_status(g.index_of("LHR").unwrap(), InfectionState::Infected).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.json");
        write_graph_json(&g, &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["directed"], Value::Bool(true));
        assert_eq!(value["nodes"][1]["id"], "LHR");
        assert_eq!(value["nodes"][1]["infection_status"], "infected");
        assert_eq!(value["links"][0]["source"], "JFK");
        assert_eq!(value["links"][0]["weight"], 0.6);

        let data: NodeLinkData = serde_json::from_str(&raw).unwrap();
        assert_eq!(data, NodeLinkData::from(&g));
    }

    #[test]
    fn unwritable_path_is_reported()
    {
        let g = RouteGraph::new();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("graph.json");
        let err = write_graph_json(&g, &path).unwrap_err();
        assert!(matches!(err, SimError::Io{..}));
    }
}
