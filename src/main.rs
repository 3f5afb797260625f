use anyhow::{Context, Result};
use fingerspell::{recognize, HandLandmarkerResult, Letter, Recognition, Thresholds};
use indicatif::{ProgressBar, ProgressStyle};
use std::{
    collections::BTreeMap,
    fmt,
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::{channel, Receiver, RecvTimeoutError},
        Arc,
    },
    thread,
    time::Duration,
};
use structopt::StructOpt;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;

#[derive(structopt::StructOpt)]
struct Opt {
    /// JSON-lines file of hand landmarker results, one frame per line. Reads
    /// stdin when omitted.
    input: Option<PathBuf>,

    /// JSON file overriding letter thresholds.
    #[structopt(short, long)]
    thresholds: Option<PathBuf>,

    #[structopt(short, long, default_value = "info", env = "RUST_LOG")]
    log_level: tracing_subscriber::filter::EnvFilter,

    /// Print the derived features after each frame's letter.
    #[structopt(short, long)]
    features: bool,

    #[structopt(short, long)]
    show_progress: bool,
}

#[derive(Debug, Default)]
struct Tally {
    letters: BTreeMap<Letter, usize>,
    no_letter: usize,
    no_hand: usize,
    skipped: usize,
}

impl Tally {
    fn record(&mut self, recognition: Option<&Recognition>) {
        match recognition.map(|r| r.letter) {
            Some(Some(letter)) => *self.letters.entry(letter).or_default() += 1,
            Some(None) => self.no_letter += 1,
            None => self.no_hand += 1,
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in Letter::PRIORITY {
            write!(
                f,
                "{}: {}, ",
                letter,
                self.letters.get(&letter).copied().unwrap_or_default()
            )?;
        }
        write!(
            f,
            "none: {}, no hand: {}, skipped: {}",
            self.no_letter, self.no_hand, self.skipped
        )
    }
}

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Read `input` on its own thread so a blocked read never holds up a Ctrl-C.
fn spawn_reader(input: Box<dyn BufRead + Send>) -> Receiver<io::Result<String>> {
    let (lines_tx, lines_rx) = channel();
    thread::spawn(move || {
        for line in input.lines() {
            if lines_tx.send(line).is_err() {
                break;
            }
        }
    });
    lines_rx
}

/// The next input line, or `None` once the input is exhausted or `running`
/// is cleared.
fn next_line(
    lines: &Receiver<io::Result<String>>,
    running: &AtomicBool,
) -> Option<io::Result<String>> {
    while running.load(Ordering::SeqCst) {
        match lines.recv_timeout(POLL_INTERVAL) {
            Ok(line) => return Some(line),
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => return None,
        }
    }
    None
}

/// Write `<frame>\t<letter>` where the letter is `A`..`E`, `none`, or `-` for a
/// frame without a hand.
fn write_frame(
    out: &mut impl Write,
    frame: usize,
    recognition: Option<&Recognition>,
    show_features: bool,
) -> io::Result<()> {
    let recognition = match recognition {
        Some(recognition) => recognition,
        None => return writeln!(out, "{}\t-", frame),
    };

    match recognition.letter {
        Some(letter) => writeln!(out, "{}\t{}", frame, letter)?,
        None => writeln!(out, "{}\tnone", frame)?,
    }

    if show_features {
        let features = &recognition.features;
        let normal = features.palm_normal();
        write!(
            out,
            "\thandedness={} hand_scale={:.4} palm_normal=({:.3},{:.3},{:.3})",
            features.handedness,
            features.hand_scale(),
            normal.x(),
            normal.y(),
            normal.z()
        )?;
        for (name, degrees) in features.joint_angles.iter() {
            write!(out, " {}={:.1}", name, degrees)?;
        }
        let distances = &features.relative_distances;
        writeln!(
            out,
            " thumb_index={:.4} index_middle={:.4} middle_ring={:.4} ring_pinky={:.4}",
            distances.thumb_index,
            distances.index_middle,
            distances.middle_ring,
            distances.ring_pinky
        )?;
    }

    Ok(())
}

fn main() -> Result<()> {
    let opt = Opt::from_args();

    tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .with(opt.log_level),
    )?;

    let thresholds = match &opt.thresholds {
        Some(path) => Thresholds::from_path(path).context("failed loading thresholds")?,
        None => Thresholds::default(),
    };

    let input: Box<dyn BufRead + Send> = match &opt.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed opening input {:?}", path))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let running = Arc::new(AtomicBool::new(true));
    let running_ctrl_c = running.clone();

    ctrlc::set_handler(move || {
        running_ctrl_c.store(false, Ordering::SeqCst);
    })
    .context("failed setting Ctrl-C handler")?;

    let pb = if opt.show_progress {
        Some(
            ProgressBar::new_spinner().with_style(
                ProgressStyle::default_spinner()
                    .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
                    .template("{prefix:.bold.dim} {spinner} {pos} frames {wide_msg}"),
            ),
        )
    } else {
        None
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut tally = Tally::default();

    let lines = spawn_reader(input);

    for frame in 0.. {
        let line = match next_line(&lines, &running) {
            Some(line) => line.context("failed reading input")?,
            None => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let recognition = match HandLandmarkerResult::from_json(&line)
            .and_then(|result| recognize(&result, &thresholds))
        {
            Ok(recognition) => recognition,
            Err(e) => {
                warn!(message = "skipping frame", frame, error = %e);
                tally.skipped += 1;
                continue;
            }
        };

        write_frame(&mut out, frame, recognition.as_ref(), opt.features)
            .context("failed writing result")?;
        tally.record(recognition.as_ref());

        if let Some(pb) = pb.as_ref() {
            pb.set_message(tally.to_string());
            pb.inc(1);
        }
    }

    if !running.load(Ordering::SeqCst) {
        info!("interrupted");
    }
    if let Some(pb) = pb.as_ref() {
        pb.finish_and_clear();
    }
    info!(message = "done", tally = %tally);

    Ok(())
}
