/// Classification of provider failures.
///
/// Used by the class resolver to decide whether a failed lookup is skipped
/// or aborts the whole run.
///
/// | Class | Resolution continues? | Reported to user? |
/// |-------|-----------------------|-------------------|
/// | `Recoverable` | Yes, the concept spec is skipped | One-line notice |
/// | `Fatal` | No, the run aborts | Error message, non-zero exit |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FailureClass {
    /// The taxon is unknown. Skip this concept spec and keep going.
    Recoverable,

    /// Transport or service failure. Nothing about the answer can be trusted.
    Fatal,
}
