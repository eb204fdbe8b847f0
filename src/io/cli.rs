//! Command-line demo: lay out a tray, apply offsets and print its processing order

use crate::grid::{GridAccessor, GridCoord, GridDefinition, GridId, GridStore};
use crate::io::configuration::{
    DEFAULT_COLUMNS, DEFAULT_FIRST_SOCKET_X_MM, DEFAULT_FIRST_SOCKET_Y_MM, DEFAULT_PITCH_X_MM,
    DEFAULT_PITCH_Y_MM, DEFAULT_ROWS, DEFAULT_SCAN_DIRECTION, DEFAULT_START_CORNER,
};
use crate::io::error::Result;
use crate::order::{ProcessingOrder, ScanDirection, StartCorner};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "traygrid")]
#[command(
    author,
    version,
    about = "Compute the socket processing order of a tray"
)]
/// Command-line arguments for the tray demo
pub struct Cli {
    /// Number of socket columns
    #[arg(short, long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: u8,

    /// Number of socket rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: u8,

    /// Corner where processing starts
    #[arg(long, value_enum, default_value_t = DEFAULT_START_CORNER)]
    pub corner: StartCorner,

    /// Whether rows or columns are visited as a group
    #[arg(short, long, value_enum, default_value_t = DEFAULT_SCAN_DIRECTION)]
    pub direction: ScanDirection,

    /// X coordinate of the first socket in millimetres
    #[arg(long, default_value_t = DEFAULT_FIRST_SOCKET_X_MM)]
    pub first_x: f32,

    /// Y coordinate of the first socket in millimetres
    #[arg(long, default_value_t = DEFAULT_FIRST_SOCKET_Y_MM)]
    pub first_y: f32,

    /// Distance between neighbouring columns in millimetres
    #[arg(long, default_value_t = DEFAULT_PITCH_X_MM)]
    pub pitch_x: f32,

    /// Distance between neighbouring rows in millimetres
    #[arg(long, default_value_t = DEFAULT_PITCH_Y_MM)]
    pub pitch_y: f32,

    /// Shift every column after this one in X
    #[arg(long, requires = "column_shift")]
    pub shift_after_column: Option<u8>,

    /// Amount of the column shift in millimetres
    #[arg(long, requires = "shift_after_column")]
    pub column_shift: Option<f32>,

    /// Shift every row after this one in Y
    #[arg(long, requires = "row_shift")]
    pub shift_after_row: Option<u8>,

    /// Amount of the row shift in millimetres
    #[arg(long, requires = "shift_after_row")]
    pub row_shift: Option<f32>,

    /// Disable a socket, given as ROW,COLUMN (repeatable)
    #[arg(long, value_name = "ROW,COLUMN", value_parser = parse_grid_id)]
    pub disable: Vec<GridId>,

    /// Only list sockets that are in use
    #[arg(short, long)]
    pub only_in_use: bool,

    /// Log errors only
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Grid dimensions requested on the command line
    pub const fn definition(&self) -> GridDefinition {
        GridDefinition::new(self.columns, self.rows)
    }

    /// Position of the first socket
    pub const fn first_socket(&self) -> GridCoord {
        GridCoord::new(self.first_x, self.first_y)
    }

    /// Socket pitch along both axes
    pub const fn pitch(&self) -> GridCoord {
        GridCoord::new(self.pitch_x, self.pitch_y)
    }

    /// Log filter used when `RUST_LOG` is unset
    pub const fn default_log_filter(&self) -> &'static str {
        if self.quiet { "error" } else { "warn" }
    }
}

/// Parse a socket identifier written as `ROW,COLUMN`
///
/// # Errors
///
/// Returns a message if the text is not two comma-separated numbers in
/// `1..=255`
pub fn parse_grid_id(text: &str) -> std::result::Result<GridId, String> {
    let (row, column) = text
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COLUMN but got '{text}'"))?;

    let parse_axis = |name: &str, value: &str| -> std::result::Result<u8, String> {
        match value.trim().parse::<u8>() {
            Ok(0) => Err(format!("{name} numbers start at 1")),
            Ok(number) => Ok(number),
            Err(error) => Err(format!("invalid {name} '{value}': {error}")),
        }
    };

    Ok(GridId::new(
        parse_axis("row", row)?,
        parse_axis("column", column)?,
    ))
}

/// Builds the tray described by the command line and renders its order
pub struct DemoRunner {
    cli: Cli,
}

impl DemoRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Allocate the store and apply coordinates, shifts and disabled sockets
    ///
    /// # Errors
    ///
    /// Returns `IdOutOfBounds` if a disabled socket lies outside the grid
    pub fn build_store(&self) -> Result<GridStore> {
        let mut store = GridStore::new(self.cli.definition());
        let mut accessor = GridAccessor::new(&mut store);

        accessor.initialize_coordinates(self.cli.first_socket(), self.cli.pitch());

        if let (Some(column), Some(delta)) = (self.cli.shift_after_column, self.cli.column_shift) {
            accessor.adjust_column_offset(column, delta);
        }

        if let (Some(row), Some(delta)) = (self.cli.shift_after_row, self.cli.row_shift) {
            accessor.adjust_row_offset(row, delta);
        }

        for &id in &self.cli.disable {
            accessor.disable_socket(id)?;
        }

        Ok(store)
    }

    /// One line per visited socket: row, column, X and Y
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be built
    pub fn render(&self) -> Result<Vec<String>> {
        let store = self.build_store()?;

        let mut order = ProcessingOrder::new(&store);
        order.calculate(self.cli.corner, self.cli.direction);

        let visited = if self.cli.only_in_use {
            order.active_order(&store)
        } else {
            order.processing_order().to_vec()
        };

        visited
            .into_iter()
            .map(|id| -> Result<String> {
                let coord = store.socket_coordinates(id)?;
                Ok(format!(
                    "{:>3} {:>3} {:>9.3} {:>9.3}",
                    id.row(),
                    id.column(),
                    coord.x,
                    coord.y
                ))
            })
            .collect()
    }

    /// Print the rendered order to standard output
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be built
    // Printing the order is the purpose of the demo command
    #[allow(clippy::print_stdout)]
    pub fn run(&self) -> Result<()> {
        let lines = self.render()?;
        log::info!(
            "Visiting {} sockets from {:?} {:?}",
            lines.len(),
            self.cli.corner,
            self.cli.direction
        );

        for line in lines {
            println!("{line}");
        }
        Ok(())
    }
}
