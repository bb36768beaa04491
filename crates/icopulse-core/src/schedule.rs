use crate::error::Result;

/// Token for one scheduled frame callback (the browser's request id).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// "Run before next repaint" primitive.
///
/// `cancel` is synchronous: a cancelled callback never fires.
pub trait FrameScheduler {
    fn schedule(&mut self) -> Result<FrameHandle>;
    fn cancel(&mut self, handle: FrameHandle);
}
