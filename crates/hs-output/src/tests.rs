//! Integration tests for hs-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvTraceWriter, SUMMARIES_FILE, TRANSITIONS_FILE};
    use crate::row::{TickSummaryRow, TransitionRow};
    use crate::writer::TraceWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn transition_row(patient_id: u32, tick: u64) -> TransitionRow {
        TransitionRow {
            tick,
            elapsed_secs: tick as f64,
            patient_id,
            from: "awaiting_queue",
            to: "awaiting_waiting_room",
            patience: 87.5,
        }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow {
            tick,
            elapsed_secs:         tick as f64 * 2.0,
            active:               4,
            desk_queue:           1,
            waiting_room:         2,
            free_seats:           6,
            free_rooms:           0,
            free_operating_rooms: 1,
            assigned:             true,
            exited:               0,
        }
    }

    fn headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvTraceWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(TRANSITIONS_FILE).exists());
        assert!(dir.path().join(SUMMARIES_FILE).exists());
    }

    #[test]
    fn missing_output_dir_is_created() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("night_shift");
        let _w = CsvTraceWriter::new(&nested).unwrap();
        assert!(nested.join(TRANSITIONS_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(&dir.path().join(TRANSITIONS_FILE)),
            ["tick", "elapsed_secs", "patient_id", "from", "to", "patience"]
        );
        assert_eq!(
            headers(&dir.path().join(SUMMARIES_FILE)),
            [
                "tick",
                "elapsed_secs",
                "active",
                "desk_queue",
                "waiting_room",
                "free_seats",
                "free_rooms",
                "free_operating_rooms",
                "assigned",
                "exited",
            ]
        );
    }

    #[test]
    fn transition_rows_written_in_order() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_transition(&transition_row(4, 10)).unwrap();
        w.write_transition(&transition_row(2, 11)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(TRANSITIONS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "10");
        assert_eq!(&rows[0][2], "4");
        assert_eq!(&rows[0][3], "awaiting_queue");
        assert_eq!(&rows[0][5], "87.500");
        assert_eq!(&rows[1][2], "2");
    }

    #[test]
    fn tick_summary_written() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(SUMMARIES_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");     // tick
        assert_eq!(&rows[0][1], "6.000"); // 3 steps of 2 s
        assert_eq!(&rows[0][8], "1");     // assigned
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use tempfile::TempDir;

    use hs_core::{ExitId, HospitalConfig};
    use hs_mobility::TimedMover;
    use hs_patient::PatientBuilder;
    use hs_sim::HospitalBuilder;

    use crate::csv::{SUMMARIES_FILE, TRANSITIONS_FILE};
    use crate::row::{TickSummaryRow, TransitionRow};
    use crate::writer::TraceWriter;
    use crate::{CsvTraceWriter, OutputError, OutputResult, TraceObserver};

    fn run_small(dir: &TempDir, ticks: u64) {
        let config = HospitalConfig { total_ticks: ticks, ..HospitalConfig::default() };
        let mut hospital = HospitalBuilder::<TimedMover>::new(config).build().unwrap();
        for _ in 0..3 {
            hospital
                .admit(PatientBuilder::new().mover(TimedMover::uniform(1.0).unwrap()).exit(ExitId(0)))
                .unwrap();
        }
        let mut obs = TraceObserver::new(CsvTraceWriter::new(dir.path()).unwrap());
        hospital.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn one_summary_row_per_step() {
        let dir = tempfile::tempdir().unwrap();
        run_small(&dir, 12);
        let mut rdr = csv::Reader::from_path(dir.path().join(SUMMARIES_FILE)).unwrap();
        let ticks: Vec<String> = rdr.records().map(|r| r.unwrap()[0].to_owned()).collect();
        assert_eq!(ticks.len(), 12);
        assert_eq!(ticks.first().map(String::as_str), Some("0"));
        assert_eq!(ticks.last().map(String::as_str), Some("11"));
    }

    #[test]
    fn every_patient_registers_at_the_desk_first() {
        let dir = tempfile::tempdir().unwrap();
        run_small(&dir, 5);
        let mut rdr = csv::Reader::from_path(dir.path().join(TRANSITIONS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        for id in ["0", "1", "2"] {
            let first = rows.iter().find(|r| &r[2] == id).unwrap();
            assert_eq!(&first[3], "arriving");
            assert_eq!(&first[4], "awaiting_queue");
        }
    }

    /// Fails every write after the first `ok` calls.
    struct Flaky {
        ok:    usize,
        calls: usize,
    }

    impl Flaky {
        fn step(&mut self) -> OutputResult<()> {
            self.calls += 1;
            if self.calls > self.ok {
                let kind = if self.calls == self.ok + 1 {
                    std::io::ErrorKind::StorageFull
                } else {
                    std::io::ErrorKind::BrokenPipe
                };
                return Err(OutputError::Io(std::io::Error::from(kind)));
            }
            Ok(())
        }
    }

    impl TraceWriter for Flaky {
        fn write_transition(&mut self, _row: &TransitionRow) -> OutputResult<()> {
            self.step()
        }

        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            self.step()
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn first_write_error_is_kept() {
        let config = HospitalConfig { total_ticks: 4, ..HospitalConfig::default() };
        let mut hospital = HospitalBuilder::<TimedMover>::new(config).build().unwrap();
        let mut obs = TraceObserver::new(Flaky { ok: 1, calls: 0 });
        hospital.run(&mut obs).unwrap();

        match obs.take_error() {
            Some(OutputError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::StorageFull),
            other => panic!("expected the first I/O error, got {other:?}"),
        }
        assert!(obs.take_error().is_none());
        assert!(obs.into_writer().calls > 2, "writes keep being attempted");
    }
}
