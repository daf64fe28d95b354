//! Logging macros for canvas mutations.
//!
//! Builds with the `tracing` feature get the real `tracing::{debug, trace}`,
//! so mutations show up under `RUST_LOG=canvaslist=debug`. Other builds get
//! crate-private stand-ins that swallow their arguments, which keeps the
//! field syntax (`len = self.len`, `?found`) valid at every call site.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
mod silent {
    macro_rules! debug {
        ($($field:tt)*) => {};
    }

    macro_rules! trace {
        ($($field:tt)*) => {};
    }

    pub(crate) use {debug, trace};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use silent::{debug, trace};

#[cfg(test)]
mod tests {
    use super::{debug, trace};

    #[test]
    fn accepts_structured_fields() {
        let len = 3usize;
        debug!(len, idx = 1, "insert_after");
        trace!(x = 1, y = 2, found = ?Some(0), "find");
        assert_eq!(len, 3);
    }
}
