//! Integration tests for fg-output.

#[cfg(test)]
mod csv_tests {
    use fg_agent::AntState;
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AntSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(ant_id: u32, tick: u64) -> AntSnapshotRow {
        AntSnapshotRow {
            ant_id,
            tick,
            x:        ant_id as f32 * 10.0,
            y:        2.5,
            state:    AntState::Exploring,
            carrying: false,
        }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow {
            tick,
            pickups:     1,
            deliveries:  2,
            deposits:    7,
            pheromones:  40,
            food_units:  99,
            nest_stored: 12,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("ant_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("ant_snapshots.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("ant_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["ant_id", "tick", "x", "y", "state", "carrying"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers2,
            ["tick", "pickups", "deliveries", "deposits", "pheromones", "food_units", "nest_stored"]
        );
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let mut carrier = snap_row(2, 5);
        carrier.state = AntState::CarryingFood;
        carrier.carrying = true;
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5), carrier]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("ant_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "0"); // ant_id
        assert_eq!(&rows[0][1], "5"); // tick
        assert_eq!(&rows[1][2], "10.000");
        assert_eq!(&rows[1][3], "2.500");
        assert_eq!(&rows[0][4], "exploring");
        assert_eq!(&rows[0][5], "0");
        assert_eq!(&rows[2][4], "carrying_food");
        assert_eq!(&rows[2][5], "1");
    }

    #[test]
    fn csv_tick_summary_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        let fields: Vec<_> = rows[0].iter().collect();
        assert_eq!(fields, ["3", "1", "2", "7", "40", "99", "12"]);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use fg_agent::ColonyBuilder;
    use fg_arena::Nest;
    use fg_behavior::{ForagingBehavior, NoopBehavior};
    use fg_core::{NestId, SimConfig, Vec2};
    use fg_sim::SimBuilder;
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::observer::SimOutputObserver;
    use crate::row::{AntSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    const HOME: Vec2 = Vec2::new(400.0, 300.0);

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn config(total_ticks: u64, output_interval_ticks: u64) -> SimConfig {
        SimConfig { total_ticks, output_interval_ticks, seed: 1, ..SimConfig::default() }
    }

    /// A writer whose snapshot writes always fail.
    #[derive(Default)]
    struct FailingWriter {
        snapshot_calls: usize,
        summaries:      usize,
        finished:       bool,
    }

    impl OutputWriter for FailingWriter {
        fn write_snapshots(&mut self, _rows: &[AntSnapshotRow]) -> OutputResult<()> {
            self.snapshot_calls += 1;
            Err(OutputError::Io(std::io::Error::other(format!("disk full #{}", self.snapshot_calls))))
        }

        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            self.summaries += 1;
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn integration_csv() {
        let config = config(6, 2);
        let (colony, rngs) =
            ColonyBuilder::new(config.ant.clone(), config.seed).spawn(3, NestId(0), HOME).build().unwrap();
        let behavior = ForagingBehavior::from_config(&config);
        let mut sim = SimBuilder::new(config, colony, rngs, behavior)
            .nest(Nest::new(HOME, 20.0))
            .build()
            .unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run(&mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");

        // output_interval = 2 → snapshots at ticks 0, 2, 4 (3 ticks × 3 ants = 9 rows)
        let mut rdr = csv::Reader::from_path(dir.path().join("ant_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 9, "expected 9 snapshot rows, got {}", rows.len());
        let ticks: Vec<_> = rows.iter().map(|r| r[1].to_owned()).collect();
        assert_eq!(ticks, ["0", "0", "0", "2", "2", "2", "4", "4", "4"]);

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(&rows[5][0], "5");
    }

    #[test]
    fn first_error_is_kept_and_run_continues() {
        let config = config(4, 1);
        let (colony, rngs) =
            ColonyBuilder::new(config.ant.clone(), config.seed).spawn(2, NestId(0), HOME).build().unwrap();
        let mut sim = SimBuilder::new(config, colony, rngs, NoopBehavior)
            .nest(Nest::new(HOME, 20.0))
            .build()
            .unwrap();

        let mut obs = SimOutputObserver::new(FailingWriter::default());
        sim.run(&mut obs);

        let err = obs.take_error().expect("snapshot failure recorded");
        assert!(err.to_string().contains("disk full #1"), "got {err}");
        assert!(obs.take_error().is_none(), "error is taken only once");

        let writer = obs.into_writer();
        assert_eq!(writer.snapshot_calls, 4);
        assert_eq!(writer.summaries, 4);
        assert!(writer.finished);
    }

    #[test]
    fn empty_colony_writes_no_snapshots() {
        let config = config(3, 1);
        let (colony, rngs) = ColonyBuilder::new(config.ant.clone(), config.seed).build().unwrap();
        let mut sim = SimBuilder::new(config, colony, rngs, NoopBehavior).build().unwrap();

        let mut obs = SimOutputObserver::new(FailingWriter::default());
        sim.run(&mut obs);

        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().snapshot_calls, 0);
    }
}
