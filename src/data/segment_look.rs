//! SegmentLook: visual styling for normal breathing and each apnea category.

use eframe::egui;

use crate::data::apnea::ApneaKind;
use crate::data::segments::SegmentKind;

/// Color and stroke width of one kind of segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentLook {
    pub color: egui::Color32,
    pub width: f32,
}

impl SegmentLook {
    pub const fn new(color: egui::Color32, width: f32) -> Self {
        Self { color, width }
    }
}

/// Looks for every segment kind, also used for the legend markers.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentLooks {
    pub normal: SegmentLook,
    pub osa: SegmentLook,
    pub csa: SegmentLook,
    pub msa: SegmentLook,
    /// Stroke width of the legend bars.
    pub legend_width: f32,
}

impl Default for SegmentLooks {
    fn default() -> Self {
        Self {
            normal: SegmentLook::new(egui::Color32::from_rgba_unmultiplied(128, 0, 128, 128), 1.0),
            osa: SegmentLook::new(egui::Color32::from_rgba_unmultiplied(255, 0, 0, 230), 1.8),
            csa: SegmentLook::new(egui::Color32::from_rgba_unmultiplied(0, 0, 255, 230), 1.8),
            msa: SegmentLook::new(egui::Color32::from_rgba_unmultiplied(255, 165, 0, 230), 1.8),
            legend_width: 5.0,
        }
    }
}

impl SegmentLooks {
    pub fn for_kind(&self, kind: SegmentKind) -> SegmentLook {
        match kind {
            SegmentKind::Normal => self.normal,
            SegmentKind::Event(k) => self.for_apnea(k),
        }
    }

    pub fn for_apnea(&self, kind: ApneaKind) -> SegmentLook {
        match kind {
            ApneaKind::Osa => self.osa,
            ApneaKind::Csa => self.csa,
            ApneaKind::Msa => self.msa,
        }
    }
}
