/// What the frame loop should do after a failed surface acquire.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// The surface was reconfigured; the next redraw can try again.
    Reconfigured,
    /// Transient failure; drop this frame and keep going.
    SkipFrame,
    /// Unrecoverable (out of memory); the application should exit.
    Fatal,
}
