//! Page-specific call-outs for the year view
//!
//! Each story page (2-6) highlights a stretch of the year. Page 1 and any
//! unknown page carry no call-outs.

use super::colors::{
    CALLOUT_BLUE, CALLOUT_DARKGREEN, CALLOUT_GREEN, CALLOUT_HINT, CALLOUT_MILD, CALLOUT_ORANGE,
    CALLOUT_PURPLE,
};
use super::{Annotation, Layer, Overlay, Shape, XRef, YAxis, YRef};
use crate::date::reference_day_of_year;

pub const FIRST_PAGE: u32 = 1;
pub const LAST_PAGE: u32 = 6;

const CALLOUT_FONT: f64 = 17.0;

/// Call-outs for one page, all page-scoped
pub fn page_overlay(page: u32) -> Overlay {
    let mut overlay = Overlay::default();
    match page {
        2 => {
            let (from, to) = (reference_day_of_year(5, 1), reference_day_of_year(10, 10));
            overlay.shapes.push(callout_rect(
                (from, to),
                (-0.5, 0.5),
                YAxis::Comfort,
                CALLOUT_MILD,
                3.0,
            ));
            overlay.annotations.push(callout_text(
                "Thanks to natural environment, comfort in this periods is sustained without needing energy use",
                (from + to) / 2.0,
                1.45,
                YAxis::Comfort,
            ));
        }
        3 => {
            let (jan1, mar30) = (reference_day_of_year(1, 1), reference_day_of_year(3, 30));
            let (aug9, oct9) = (reference_day_of_year(8, 9), reference_day_of_year(10, 9));
            overlay.shapes.push(callout_rect(
                (jan1, mar30),
                (0.0, 1.45),
                YAxis::Comfort,
                CALLOUT_PURPLE,
                2.0,
            ));
            overlay.shapes.push(callout_rect(
                (aug9, oct9),
                (-0.5, 0.5),
                YAxis::Comfort,
                CALLOUT_GREEN,
                2.0,
            ));
            overlay.annotations.push(callout_text(
                "In the purple annotation, energy use is inefficient, as people still feel too warm in the heat of summer.\n\
                 In contrast, the green annotation demonstrate when energy use make PMV grows out of comfort, leaning to the colder side.",
                aug9,
                1.55,
                YAxis::Comfort,
            ));
        }
        4 => {
            let (from, to) = (reference_day_of_year(5, 7), reference_day_of_year(8, 1));
            overlay.shapes.push(callout_rect(
                (from, to),
                (-1.55, -0.5),
                YAxis::Comfort,
                CALLOUT_ORANGE,
                2.0,
            ));
            overlay.shapes.push(callout_rect(
                (from, to),
                (-0.5, 0.5),
                YAxis::Comfort,
                CALLOUT_DARKGREEN,
                2.0,
            ));
            overlay.annotations.push(callout_text(
                "Energy usage during work have spikey lines as the score goes down on weekend.\n\
                 PMV is stable, yet patterns regarding break and work days is still visible",
                (from + to) / 2.0,
                1.5,
                YAxis::Comfort,
            ));
        }
        5 => {
            let (from, to) = (reference_day_of_year(1, 1), reference_day_of_year(4, 30));
            overlay.shapes.push(callout_rect(
                (from, to),
                (1.0, 1.65),
                YAxis::Energy,
                CALLOUT_BLUE,
                2.0,
            ));
            overlay.annotations.push(callout_text(
                "PMV get spikey during hotter seasons, with work days being more comfortable\n\
                 as there is the service of HVAC energy, yet it is not enough ...",
                (from + to) / 2.0,
                1.75,
                YAxis::Energy,
            ));
        }
        6 => {
            overlay.annotations.push(
                Annotation::new(
                    "Scroll down for Day View",
                    reference_day_of_year(11, 15),
                    2.1,
                    XRef::Data,
                    YRef::Axis(YAxis::Comfort),
                )
                .font(16.0, CALLOUT_HINT)
                .bold()
                .page(),
            );
        }
        _ => {}
    }
    overlay
}

fn callout_rect(
    x: (f64, f64),
    y: (f64, f64),
    axis: YAxis,
    (stroke, fill): (&'static str, &'static str),
    width: f64,
) -> Shape {
    Shape::rect(x, y, XRef::Data, YRef::Axis(axis))
        .stroke(stroke, width)
        .fill(fill)
        .layer(Layer::Above)
        .page()
}

fn callout_text(text: &str, x: f64, y: f64, axis: YAxis) -> Annotation {
    Annotation::new(text, x, y, XRef::Data, YRef::Axis(axis))
        .font(CALLOUT_FONT, "black")
        .bold()
        .page()
}
