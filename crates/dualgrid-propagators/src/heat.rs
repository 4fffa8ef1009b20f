//! Heat cell data and helpers.

use dualgrid_core::{Cell, CellObserver, Injection, Position, TickId};
use indexmap::IndexMap;

/// Temperature every cell of the reference world starts at.
pub const AMBIENT_TEMPERATURE: f64 = 21.0;

/// Heat added to a cell by one [`heat_injection`].
pub const HEAT_INJECTION_AMOUNT: f64 = 21.0;

/// Per-cell state of the heat model.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeatData {
    /// Cell temperature, in arbitrary units.
    pub temperature: f64,
}

impl HeatData {
    /// A cell at `temperature`.
    pub const fn new(temperature: f64) -> Self {
        Self { temperature }
    }

    /// A cell at [`AMBIENT_TEMPERATURE`].
    pub const fn ambient() -> Self {
        Self::new(AMBIENT_TEMPERATURE)
    }

    /// This cell with `amount` more heat.
    pub fn heated(self, amount: f64) -> Self {
        Self::new(self.temperature + amount)
    }
}

/// Command adding [`HEAT_INJECTION_AMOUNT`] to the temperature of `cell`.
///
/// Applied through the immediate-write path, so the added heat is visible
/// to the very next read and to the next diffusion pass.
///
/// ```
/// use dualgrid_core::Cell;
/// use dualgrid_propagators::{heat_injection, HeatData};
///
/// let inject = heat_injection(Cell::new(3, 3));
/// assert_eq!(inject.apply(HeatData::ambient()), HeatData::new(42.0));
/// ```
pub fn heat_injection(cell: Cell) -> Injection<HeatData> {
    Injection::update(cell, |data: HeatData| data.heated(HEAT_INJECTION_AMOUNT))
}

/// Display label for a temperature: rounded to an integer, with `,`
/// separating groups of thousands.
pub fn temperature_label(temperature: f64) -> String {
    if !temperature.is_finite() {
        return temperature.to_string();
    }
    let rounded = temperature.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Observer keeping one temperature label per cell, anchored at the cell
/// centre.
///
/// Re-observing a cell replaces its label in place, so one instance can be
/// fed every frame.
#[derive(Debug, Default)]
pub struct TemperatureLabels {
    labels: IndexMap<Cell, (Position, String)>,
    tick: TickId,
}

impl TemperatureLabels {
    /// An empty label set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Label of `cell`, if observed.
    pub fn label(&self, cell: Cell) -> Option<&str> {
        self.labels.get(&cell).map(|(_, text)| text.as_str())
    }

    /// All labels, in first-observed order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Position, &str)> + '_ {
        self.labels
            .iter()
            .map(|(cell, (anchor, text))| (*cell, *anchor, text.as_str()))
    }

    /// Tick of the most recent observation.
    pub fn tick(&self) -> TickId {
        self.tick
    }

    /// Number of labelled cells.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if no cell has been observed.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl CellObserver<HeatData> for TemperatureLabels {
    fn observe(&mut self, tick: TickId, cell: Cell, centre: Position, value: &HeatData) {
        self.tick = tick;
        self.labels
            .insert(cell, (centre, temperature_label(value.temperature)));
    }
}
