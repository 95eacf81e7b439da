use{
    std::{
        fs::File,
        io::{Write, BufWriter},
        path::{Path, PathBuf}
    },
    serde_json::Value,
    crate::error::SimError,
    super::*
};

pub type CurveWriter = BufWriter<File>;

pub const METRICS_HEADER: [&str; 5] = [
    "day",
    "susceptible",
    "infected",
    "cured",
    "avg_inbound_weight_infected"
];

/// Writes one csv row per day and, if configured, exports the graph
/// after every reweighting.
pub struct SimWriter
{
    writer: csv::Writer<CurveWriter>,
    path: PathBuf,
    export_path: Option<PathBuf>
}

impl SimWriter
{
    pub fn new<P: AsRef<Path>>(metrics_path: P, export_path: Option<PathBuf>) -> Result<Self, SimError>
    {
        let path = metrics_path.as_ref().to_path_buf();
        let file = File::create(&path)
            .map_err(|e| SimError::io(&path, e))?;
        let mut writer = csv::Writer::from_writer(BufWriter::new(file));
        writer.write_record(METRICS_HEADER)?;
        Ok(
            Self{
                writer,
                path,
                export_path
            }
        )
    }

    pub fn flush(&mut self) -> Result<(), SimError>
    {
        self.writer.flush()
            .map_err(|e| SimError::io(&self.path, e))
    }
}

impl SimObserver for SimWriter
{
    fn reweighted(&mut self, _day: usize, graph: &RouteGraph) -> Result<(), SimError>
    {
        match &self.export_path{
            Some(path) => write_graph_json(graph, path),
            None => Ok(())
        }
    }

    fn record(&mut self, metrics: &CycleMetrics) -> Result<(), SimError>
    {
        let avg = metrics.avg_inbound_weight_infected
            .map(|w| w.to_string())
            .unwrap_or_default();
        self.writer.write_record(
            &[
                metrics.day.to_string(),
                metrics.susceptible.to_string(),
                metrics.infected.to_string(),
                metrics.cured.to_string(),
                avg
            ]
        )?;
        Ok(())
    }
}

impl Drop for SimWriter
{
    fn drop(&mut self)
    {
        if let Err(e) = self.writer.flush(){
            log::error!("failed to flush {}: {}", self.path.display(), e);
        }
    }
}

/// Writes the parameters as `#` prefixed comment lines
pub fn write_jsons<W: Write>(jsons: &[Value], mut writer: W) -> std::io::Result<()>
{
    for j in jsons{
        write!(writer, "#")?;
        serde_json::to_writer(&mut writer, j)?;
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn one_row_per_record()
    {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.csv");
        let export = dir.path().join("graph.json");
        {
            let mut writer = SimWriter::new(&path, Some(export.clone())).unwrap();
            let mut g = RouteGraph::new();
            g.add_route("A", "B", 0.3);
            writer.reweighted(1, &g).unwrap();
            writer.record(
                &CycleMetrics{
                    day: 1,
                    susceptible: 2,
                    infected: 0,
                    cured: 0,
                    avg_inbound_weight_infected: None
                }
            ).unwrap();
            writer.record(
                &CycleMetrics{
                    day: 2,
                    susceptible: 1,
                    infected: 1,
                    cured: 0,
                    avg_inbound_weight_infected: Some(0.5)
                }
            ).unwrap();
            writer.flush().unwrap();
        }
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "day,susceptible,infected,cured,avg_inbound_weight_infected",
                "1,2,0,0,",
                "2,1,1,0,0.5"
            ]
        );
        assert!(export.exists());
    }

    #[test]
    fn jsons_are_comments()
    {
        let mut buf = Vec::new();
        write_jsons(&[serde_json::json!({"days": 3})], &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "#{\"days\":3}\n");
    }
}
