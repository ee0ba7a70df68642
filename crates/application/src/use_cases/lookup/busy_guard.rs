use crate::ports::SubmitControl;

/// Holds the submit control in its busy state for as long as the guard lives.
/// Released on drop.
pub struct BusyGuard<'a> {
    control: &'a dyn SubmitControl,
}

impl<'a> BusyGuard<'a> {
    /// Marks the control busy. Returns `None` if it already is, which means
    /// another submission owns it.
    pub fn acquire(control: &'a dyn SubmitControl) -> Option<Self> {
        control.try_set_busy().then_some(Self { control })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.control.set_busy(false);
    }
}
