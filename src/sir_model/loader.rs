use{
    std::{
        fs::File,
        io::{BufRead, BufReader},
        path::Path
    },
    rand::Rng,
    crate::error::SimError,
    super::*
};

/// Builds a graph from an edge list, one `from to` pair per line.
/// Blank lines and lines starting with `#` are skipped.
pub fn load_edge_list<B: BufRead>(reader: B, initial_weight: f64) -> Result<RouteGraph, SimError>
{
    let mut graph = RouteGraph::new();
    for (i, line) in reader.lines().enumerate()
    {
        let line = line.map_err(|e| SimError::io("<edge list>", e))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let mut iter = trimmed.split_whitespace();
        match (iter.next(), iter.next()) {
            (Some(from), Some(to)) => {
                log::trace!("{} , {}", from, to);
                graph.add_route(from, to, initial_weight);
            },
            _ => return Err(
                SimError::MalformedEdgeLine{
                    line_number: i + 1,
                    line
                }
            )
        }
    }
    Ok(graph)
}

pub fn load_edge_list_file<P: AsRef<Path>>(path: P, initial_weight: f64) -> Result<RouteGraph, SimError>
{
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| SimError::io(path, e))?;
    let graph = load_edge_list(BufReader::new(file), initial_weight)?;
    log::info!(
        "loaded {} airports and {} routes from {}",
        graph.node_count(),
        graph.edge_count(),
        path.display()
    );
    Ok(graph)
}

/// Directed G(n,p): every ordered pair of distinct nodes becomes a route
/// with probability `p`
pub fn erdos_renyi<R: Rng>(n: usize, p: f64, initial_weight: f64, rng: &mut R) -> RouteGraph
{
    let mut graph = RouteGraph::new();
    let names: Vec<String> = (0..n).map(|i| i.to_string()).collect();
    for name in names.iter()
    {
        graph.add_airport(name);
    }
    if p > 0.0 {
        for (i, from) in names.iter().enumerate()
        {
            for (j, to) in names.iter().enumerate()
            {
                if i != j && (p >= 1.0 || rng.gen::<f64>() < p) {
                    graph.add_route(from, to, initial_weight);
                }
            }
        }
    }
    log::info!(
        "Number of nodes and edges in Erdos Renyi graph are: {}, {}",
        graph.node_count(),
        graph.edge_count()
    );
    graph
}

#[cfg(test)]
mod tests
{
    use super::*;
    use rand_pcg::Pcg64;
    use rand::SeedableRng;

    #[test]
    fn parses_edge_list()
    {
        let input = "# routes\nJFK LHR\n\nLHR CDG extra\nCDG JFK\nJFK LHR\n";
        let g = load_edge_list(input.as_bytes(), 0.1).unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.route("LHR", "CDG").unwrap().weight, 0.1);
        assert!(g.airports().all(|a| a.infection_status.sus_check()));
    }

    #[test]
    fn rejects_single_token_line()
    {
        let err = load_edge_list("A B\nC\n".as_bytes(), 0.1).unwrap_err();
        match err {
            SimError::MalformedEdgeLine{line_number, line} => {
                assert_eq!(line_number, 2);
                assert_eq!(line, "C");
            },
            other => panic!("unexpected error {other:?}")
        }
    }

    #[test]
    fn missing_file()
    {
        let dir = tempfile::tempdir().unwrap();
        let err = load_edge_list_file(dir.path().join("nope.txt"), 0.1).unwrap_err();
        assert!(matches!(err, SimError::Io{..}));
    }

    #[test]
    fn erdos_renyi_limits()
    {
        let mut rng = Pcg64::seed_from_u64(0);
        let empty = erdos_renyi(10, 0.0, 0.1, &mut rng);
        assert_eq!(empty.node_count(), 10);
        assert_eq!(empty.edge_count(), 0);

        let full = erdos_renyi(10, 1.0, 0.1, &mut rng);
        assert_eq!(full.edge_count(), 90);

        let half = erdos_renyi(60, 0.5, 0.1, &mut rng);
        let e = half.edge_count();
        assert!(e > 1400 && e < 2140, "{e}");
    }
}
