//! # Gate Subcommand
//!
//! A line-oriented session against one facility. Each input line is one
//! command, answered by one response (the `status` response spans one line
//! per size class in text mode):
//!
//! ```text
//! park car KA-01-1234   →  issued ticket:<uuid> lot:0 medium
//! unpark ticket:<uuid>  →  released ticket:<uuid>
//! unpark ticket:<uuid>  →  refused ticket:<uuid>
//! status                →  small 0/2 / medium 0/5 / large 0/1
//! ```
//!
//! Blank lines and `#` comments are skipped. A malformed line is answered
//! with `error: ...` and the session carries on.
//!
//! The session keeps every ticket it issued, including spent ones, so that
//! a repeated `unpark` is refused by the facility itself rather than by
//! the bookkeeping here.

use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::str::FromStr;

use clap::Args;
use serde::Serialize;
use thiserror::Error;

use lotkeep_core::{CoreError, LotId, TicketId};
use lotkeep_facility::{
    Client, FacilityCapacities, LotManager, OccupancyReport, SizeClass, Ticket, VehicleKind,
};

use crate::config::FacilityArgs;

/// Arguments for the gate subcommand.
#[derive(Args, Debug)]
pub struct GateArgs {
    #[command(flatten)]
    pub facility: FacilityArgs,

    /// Emit one JSON object per response instead of text.
    #[arg(long)]
    pub json: bool,
}

// ─── Commands ────────────────────────────────────────────────────────

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Admit a vehicle.
    Park(Client),
    /// Present a ticket at the exit.
    Unpark(TicketId),
    /// Report occupancy.
    Status,
}

/// Why an input line could not be understood.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The first word is not a command.
    #[error("unknown command {0:?} (expected park, unpark or status)")]
    Unknown(String),

    /// A required argument is absent.
    #[error("missing {0}")]
    Missing(&'static str),

    /// Trailing words after a complete command.
    #[error("unexpected argument {0:?}")]
    Unexpected(String),

    /// The ticket argument is not a ticket id.
    #[error("invalid ticket id {0:?}")]
    TicketId(String),

    /// The vehicle kind or identity was rejected.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = match words.next() {
            Some("park") => {
                let kind: VehicleKind = words
                    .next()
                    .ok_or(CommandError::Missing("vehicle kind"))?
                    .parse()?;
                let id = words.next().ok_or(CommandError::Missing("vehicle id"))?;
                Self::Park(Client::vehicle(kind, id)?)
            }
            Some("unpark") => {
                let raw = words.next().ok_or(CommandError::Missing("ticket id"))?;
                let id = raw
                    .parse()
                    .map_err(|_| CommandError::TicketId(raw.to_string()))?;
                Self::Unpark(id)
            }
            Some("status") => Self::Status,
            Some(other) => return Err(CommandError::Unknown(other.to_string())),
            None => return Err(CommandError::Missing("command")),
        };
        match words.next() {
            Some(extra) => Err(CommandError::Unexpected(extra.to_string())),
            None => Ok(command),
        }
    }
}

// ─── Responses ───────────────────────────────────────────────────────

/// The answer to one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Response {
    /// A lot was assigned.
    Issued {
        /// The new ticket.
        ticket: TicketId,
        /// The assigned lot.
        lot: LotId,
        /// The lot's size class.
        size_class: SizeClass,
    },
    /// No lot of the vehicle's size class was free.
    Rejected {
        /// The requested size class.
        size_class: SizeClass,
    },
    /// The ticket freed its lot.
    Released {
        /// The spent ticket.
        ticket: TicketId,
    },
    /// The ticket was refused (unknown, spent, or not matching its lot).
    Refused {
        /// The presented ticket.
        ticket: TicketId,
    },
    /// Occupancy of every pool.
    Status {
        /// Small to large.
        pools: Vec<OccupancyReport>,
    },
    /// The input line was malformed.
    Error {
        /// What was wrong.
        message: String,
    },
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Issued {
                ticket,
                lot,
                size_class,
            } => write!(f, "issued {ticket} {lot} {size_class}"),
            Self::Rejected { size_class } => write!(f, "rejected {size_class}"),
            Self::Released { ticket } => write!(f, "released {ticket}"),
            Self::Refused { ticket } => write!(f, "refused {ticket}"),
            Self::Status { pools } => {
                let lines: Vec<String> = pools.iter().map(ToString::to_string).collect();
                f.write_str(&lines.join("\n"))
            }
            Self::Error { message } => write!(f, "error: {message}"),
        }
    }
}

// ─── Session ─────────────────────────────────────────────────────────

/// Counters for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    /// Tickets issued.
    pub issued: usize,
    /// Tickets redeemed.
    pub released: usize,
    /// Arrivals turned away.
    pub rejected: usize,
    /// Tickets refused at the exit.
    pub refused: usize,
    /// Lines that could not be parsed.
    pub errors: usize,
}

/// A facility plus the tickets it has handed out during this session.
#[derive(Debug)]
pub struct GateSession {
    facility: LotManager,
    /// Grows by one entry per issued ticket and is never pruned; a gate
    /// session is bounded by its input, so memory tracks the traffic it saw.
    book: HashMap<TicketId, Ticket>,
    summary: SessionSummary,
}

impl GateSession {
    /// Open a session on a fresh facility.
    pub fn new(capacities: FacilityCapacities) -> Self {
        Self {
            facility: LotManager::from_capacities(capacities),
            book: HashMap::new(),
            summary: SessionSummary::default(),
        }
    }

    /// The facility behind this session.
    pub fn facility(&self) -> &LotManager {
        &self.facility
    }

    /// Counters so far.
    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Run one command.
    pub fn execute(&mut self, command: Command) -> Response {
        match command {
            Command::Park(client) => match self.facility.park(&client) {
                Some(ticket) => {
                    self.summary.issued += 1;
                    let response = Response::Issued {
                        ticket: ticket.id(),
                        lot: ticket.lot_id(),
                        size_class: ticket.size_class(),
                    };
                    self.book.insert(ticket.id(), ticket);
                    response
                }
                None => {
                    self.summary.rejected += 1;
                    Response::Rejected {
                        size_class: client.size_class(),
                    }
                }
            },
            Command::Unpark(id) => {
                let released = match self.book.get_mut(&id) {
                    Some(ticket) => self.facility.unpark(ticket),
                    None => false,
                };
                if released {
                    self.summary.released += 1;
                    Response::Released { ticket: id }
                } else {
                    self.summary.refused += 1;
                    Response::Refused { ticket: id }
                }
            }
            Command::Status => Response::Status {
                pools: self.facility.reports(),
            },
        }
    }

    /// Parse and run one input line. Blank lines and comments yield `None`.
    pub fn handle_line(&mut self, line: &str) -> Option<Response> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        Some(match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(e) => {
                tracing::debug!(%line, error = %e, "unparseable gate command");
                self.summary.errors += 1;
                Response::Error {
                    message: e.to_string(),
                }
            }
        })
    }

    /// Serve every line of `input`, writing responses to `output`.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
        json: bool,
    ) -> anyhow::Result<SessionSummary> {
        for line in input.lines() {
            let line = line?;
            let Some(response) = self.handle_line(&line) else {
                continue;
            };
            if json {
                serde_json::to_writer(&mut output, &response)?;
                writeln!(output)?;
            } else {
                writeln!(output, "{response}")?;
            }
            output.flush()?;
        }
        Ok(self.summary)
    }
}

/// Run the gate subcommand on stdin/stdout.
pub fn run_gate(args: &GateArgs) -> anyhow::Result<()> {
    let capacities = args.facility.resolve()?;
    tracing::info!(
        small = %capacities.small,
        medium = %capacities.medium,
        large = %capacities.large,
        "gate open"
    );
    let mut session = GateSession::new(capacities);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let summary = session.run(stdin.lock(), stdout.lock(), args.json)?;
    tracing::info!(?summary, "gate closed");
    Ok(())
}
