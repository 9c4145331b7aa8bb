//! er_shift: one four-hour emergency-room shift.
//!
//! Patients arrive as a Poisson stream (or from a CSV given as the first
//! argument), queue at the reception desk, wait in the waiting room, see a
//! doctor, and some go on to surgery.  Staff actions are scripted in
//! `staff.rs`.  A transition trace and per-step summaries are written to
//! `output/er_shift/`.

mod staff;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use hs_core::{HospitalConfig, SimClock, SimRng};
use hs_mobility::{TimedMover, TravelTimes};
use hs_output::{CsvTraceWriter, TraceObserver, TraceWriter};
use hs_patient::PatientState;
use hs_reception::MinHeap;
use hs_sim::{
    ArrivalSchedule, HospitalBuilder, HospitalObserver, HospitalStats, LedgerWorld, TickSummary,
    Transition,
};

use staff::Staff;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:            u64 = 42;
const SHIFT_HOURS:     u64 = 4;
const ARRIVALS:        usize = 90;
const MEAN_GAP_SECS:   f64 = 150.0;
const INJURED_SHARE:   f64 = 0.3;
const OUTPUT_DIR:      &str = "output/er_shift";

const TRAVEL: TravelTimes = TravelTimes {
    to_desk:           10.0,
    to_seat:           8.0,
    to_room:           15.0,
    to_operating_room: 25.0,
    to_exit:           20.0,
};

// ── Observer wrapper to count rows ────────────────────────────────────────────

struct CountingObserver<W: TraceWriter> {
    inner:          TraceObserver<W>,
    transitions:    usize,
    summaries:      usize,
    peak_desk:      usize,
    peak_waiting:   usize,
}

impl<W: TraceWriter> CountingObserver<W> {
    fn new(inner: TraceObserver<W>) -> Self {
        Self { inner, transitions: 0, summaries: 0, peak_desk: 0, peak_waiting: 0 }
    }
}

impl<W: TraceWriter> HospitalObserver for CountingObserver<W> {
    fn on_transition(&mut self, clock: &SimClock, transition: &Transition) {
        self.transitions += 1;
        if transition.to == PatientState::Abandoning {
            println!("  {clock}  {} gave up while {}", transition.patient, transition.from);
        }
        self.inner.on_transition(clock, transition);
    }

    fn on_tick_end(&mut self, clock: &SimClock, summary: &TickSummary) {
        self.summaries += 1;
        self.peak_desk = self.peak_desk.max(summary.desk_queue);
        self.peak_waiting = self.peak_waiting.max(summary.waiting_room);
        self.inner.on_tick_end(clock, summary);
    }

    fn on_sim_end(&mut self, clock: &SimClock, stats: &HospitalStats) {
        self.inner.on_sim_end(clock, stats);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== er_shift: hospital_sim ===");

    // 1. Config.
    let config = HospitalConfig {
        max_patience:           100.0,
        patience_decay_per_sec: 0.05,
        tick_secs:              1.0,
        total_ticks:            SHIFT_HOURS * 3_600,
        waiting_seats:          10,
        consultation_rooms:     3,
        operating_rooms:        1,
        exits:                  2,
        notify_walk_secs:       15.0,
        seed:                   SEED,
    };
    config.validate()?;
    println!(
        "Shift: {} h  |  seats {}  rooms {}  operating rooms {}  |  seed {}",
        SHIFT_HOURS, config.waiting_seats, config.consultation_rooms, config.operating_rooms, SEED
    );

    // 2. Arrivals.
    let mut schedule = match std::env::args().nth(1) {
        Some(path) => ArrivalSchedule::load_csv(Path::new(&path))?,
        None => {
            let mut rng = SimRng::new(SEED);
            ArrivalSchedule::generate(&mut rng, &config, ARRIVALS, MEAN_GAP_SECS, INJURED_SHARE)?
        }
    };
    println!("Arrivals scheduled: {}", schedule.len());
    println!();

    // 3. Hospital, staff, output.
    let mut hospital = HospitalBuilder::<TimedMover>::new(config.clone())
        .world(LedgerWorld::new())
        .policy(MinHeap)
        .build()?;
    let mut staff = Staff::new(SEED);

    let writer = CsvTraceWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(TraceObserver::new(writer));

    // 4. Run.  Staff act between steps, so the loop is driven by hand.
    let t0 = Instant::now();
    for _ in 0..config.total_ticks {
        hospital.admit_due(&mut schedule, |_| TimedMover::new(TRAVEL));
        staff.work(&mut hospital);
        hospital.advance(config.tick_secs, &mut obs)?;
    }
    obs.on_sim_end(hospital.clock(), hospital.stats());
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    let stats = *hospital.stats();
    println!();
    println!("Shift complete in {:.3} s (simulated {})", elapsed.as_secs_f64(), hospital.clock());
    println!("  transitions.csv    : {} rows", obs.transitions);
    println!("  tick_summaries.csv : {} rows", obs.summaries);
    println!();
    println!("{:<22} {:>6}", "Outcome", "Count");
    println!("{}", "-".repeat(29));
    println!("{:<22} {:>6}", "admitted", stats.admitted);
    println!("{:<22} {:>6}", "turned away", stats.rejected);
    println!("{:<22} {:>6}", "discharged", stats.discharged);
    println!("{:<22} {:>6}", "operated", stats.operated);
    println!("{:<22} {:>6}", "abandoned", stats.abandoned);
    println!("{:<22} {:>6}", "still inside", stats.in_building());
    println!("{:<22} {:>6}", "payments", hospital.world().money_drops.len());
    println!();
    println!(
        "Staff: {} verdicts, {} transfers, {} operations, {} waits for an operating room",
        staff.counts.verdicts,
        staff.counts.transfers,
        staff.counts.operations,
        staff.counts.operating_room_waits
    );
    println!("Peak desk queue {}  |  peak waiting room {}", obs.peak_desk, obs.peak_waiting);

    Ok(())
}
