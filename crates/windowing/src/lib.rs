#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! Interfaces between the client core and its platform windowing layers: the
//! system-tray icon and the OpenGL window backing. The platform bindings
//! themselves (AppIndicator, GTK GLArea, ...) live out of tree; the client
//! only ever talks to these traits, and the implementations use the
//! [`logging`] crate's category loggers for their diagnostics
//! (`category_logger!("tray", "posix")` and friends).
//!
//! Nothing in this crate touches a display server, so the traits can be
//! exercised with in-memory stubs, which is exactly what the tests do.

use std::fmt;

/// Raw RGB(A) pixel data for a tray icon.
///
/// `rowstride` is the byte length of one row, which may exceed the packed
/// width when the producer pads rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconData {
    /// Packed pixel bytes, `rowstride * height` of them.
    pub pixels: Vec<u8>,
    /// Whether the pixels carry an alpha channel.
    pub has_alpha: bool,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Bytes per row.
    pub rowstride: u32,
}

impl IconData {
    /// Reports whether the buffer length matches the declared geometry.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.pixels.len() == (self.rowstride as usize) * (self.height as usize)
    }
}

impl fmt::Display for IconData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} icon ({} bytes, alpha={})",
            self.width,
            self.height,
            self.pixels.len(),
            self.has_alpha
        )
    }
}

/// A system-tray icon.
///
/// Implementations adapt whatever the platform offers; not every operation
/// is supported everywhere (AppIndicator famously cannot blink), and
/// unsupported calls are silent no-ops rather than errors.
pub trait Tray {
    /// Makes the tray icon visible.
    fn show(&mut self);

    /// Hides the tray icon.
    fn hide(&mut self);

    /// Updates the tooltip; `None` restores the application default.
    fn set_tooltip(&mut self, text: Option<&str>);

    /// Replaces the icon with raw pixel data.
    fn set_icon_from_data(&mut self, icon: &IconData);

    /// Starts or stops attention blinking, where the platform supports it.
    fn set_blinking(&mut self, on: bool);
}

/// An OpenGL-capable window backing.
///
/// The context type is platform specific, so it is an associated type; the
/// client core only threads it through
/// [`with_gl_context`](Self::with_gl_context) callbacks.
pub trait GlWindowBacking {
    /// The platform's GL context handle.
    type Context;

    /// Creates the backing widget and wires up realize/render callbacks.
    fn init_backing(&mut self);

    /// Returns the current GL context, if the backing is realized.
    fn gl_context(&mut self) -> Option<&mut Self::Context>;

    /// Runs `f` with a current GL context.
    ///
    /// If the backing is not realized yet the callback is queued and runs on
    /// realize, in submission order.
    fn with_gl_context<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self::Context) + 'static;

    /// Schedules presentation of the rendered frame.
    fn do_gl_show(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging::{Logger, category_logger, debug_log, warn_log};

    #[test]
    fn icon_data_well_formedness() {
        let icon = IconData {
            pixels: vec![0; 16 * 4 * 16],
            has_alpha: true,
            width: 16,
            height: 16,
            rowstride: 16 * 4,
        };
        assert!(icon.is_well_formed());

        let truncated = IconData {
            pixels: vec![0; 10],
            ..icon
        };
        assert!(!truncated.is_well_formed());
    }

    #[test]
    fn icon_data_display() {
        let icon = IconData {
            pixels: vec![0; 8],
            has_alpha: false,
            width: 2,
            height: 2,
            rowstride: 4,
        };
        assert_eq!(icon.to_string(), "2x2 icon (8 bytes, alpha=false)");
    }

    /// Tray stub mirroring how a platform binding logs through its module
    /// logger.
    struct NullTray {
        log: Logger,
        visible: bool,
        tooltip: Option<String>,
    }

    impl NullTray {
        fn new() -> Self {
            Self {
                log: category_logger!("tray", "posix"),
                visible: false,
                tooltip: None,
            }
        }
    }

    impl Tray for NullTray {
        fn show(&mut self) {
            debug_log!(self.log, "show()");
            self.visible = true;
        }

        fn hide(&mut self) {
            debug_log!(self.log, "hide()");
            self.visible = false;
        }

        fn set_tooltip(&mut self, text: Option<&str>) {
            self.tooltip = text.map(ToString::to_string);
        }

        fn set_icon_from_data(&mut self, icon: &IconData) {
            if !icon.is_well_formed() {
                warn_log!(self.log, "ignoring malformed icon: {icon}");
            }
        }

        fn set_blinking(&mut self, _on: bool) {
            // "I'm Afraid I Can't Do That"
        }
    }

    #[test]
    fn stub_tray_carries_a_category_logger() {
        let tray = NullTray::new();
        assert!(tray.log.categories().contains(&"tray".to_string()));
        assert!(tray.log.categories().contains(&"posix".to_string()));
    }

    #[test]
    fn stub_tray_tracks_visibility_and_tooltip() {
        let mut tray = NullTray::new();
        tray.show();
        assert!(tray.visible);
        tray.hide();
        assert!(!tray.visible);

        tray.set_tooltip(Some("connected"));
        assert_eq!(tray.tooltip.as_deref(), Some("connected"));
        tray.set_tooltip(None);
        assert!(tray.tooltip.is_none());
    }

    #[test]
    fn tray_loggers_toggle_by_category() {
        let tray = NullTray::new();
        logging::enable_debug_for("tray");
        assert!(tray.log.is_debug_enabled());
        logging::disable_debug_for("tray");
        assert!(!tray.log.is_debug_enabled());
    }
}
