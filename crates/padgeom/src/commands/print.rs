// Author: Dustin Pilgrim
// License: MIT

use padgeom_core::{Axis, MonitorInfo, Rect};

pub fn print_pair([x, y]: [i32; 2]) {
    println!("{x} {y}");
}

pub fn print_rect(r: Rect) {
    println!("{} {} {} {}", r.x, r.y, r.w, r.h);
}

pub fn print_monitor(m: &MonitorInfo) {
    let name = m.name.as_deref().unwrap_or("(unnamed)");
    println!(
        "{name} @ ({}, {}) {}x{} scale {} transform {}",
        m.x, m.y, m.width, m.height, m.scale, m.transform
    );
    println!(
        "logical: {}x{}{}",
        m.scaled(Axis::Width),
        m.scaled(Axis::Height),
        if m.is_rotated() { " (rotated)" } else { "" }
    );
}
