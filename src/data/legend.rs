//! Fixed legend markers drawn above the data: one colored bar per apnea
//! category, without text.

use crate::data::apnea::ApneaKind;
use crate::data::viewport::DataExtent;

/// Horizontal span of each marker, relative to the first sample time.
const MARKER_SPANS: [(ApneaKind, f64, f64); 3] = [
    (ApneaKind::Osa, 0.0, 20.0),
    (ApneaKind::Csa, 25.0, 45.0),
    (ApneaKind::Msa, 50.0, 70.0),
];

/// One legend bar in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendMarker {
    pub kind: ApneaKind,
    pub x_start: f64,
    pub x_end: f64,
    pub y: f64,
}

impl LegendMarker {
    pub fn points(&self) -> [[f64; 2]; 2] {
        [[self.x_start, self.y], [self.x_end, self.y]]
    }
}

/// Markers anchored at `first_time`, on the legend row of `extent`.
pub fn legend_markers(first_time: f64, extent: &DataExtent) -> [LegendMarker; 3] {
    let y = extent.legend_row();
    MARKER_SPANS.map(|(kind, from, to)| LegendMarker {
        kind,
        x_start: first_time + from,
        x_end: first_time + to,
        y,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_sit_on_legend_row() {
        let extent = DataExtent {
            x_min: 100.0,
            x_max: 500.0,
            y_min: 0.0,
            y_max: 10.0,
        };
        let m = legend_markers(100.0, &extent);
        assert_eq!(m[0].kind, ApneaKind::Osa);
        assert_eq!((m[1].x_start, m[1].x_end), (125.0, 145.0));
        assert_eq!(m[2].y, 10.5);
    }
}
