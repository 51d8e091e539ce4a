/// Form data with the last server-confirmed copy kept alongside for discard.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Editable<T> {
    current: T,
    baseline: T,
}

impl<T: Clone + PartialEq> Editable<T> {
    pub fn new(value: T) -> Self {
        Self {
            current: value.clone(),
            baseline: value,
        }
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn baseline(&self) -> &T {
        &self.baseline
    }

    pub fn edit(&mut self, f: impl FnOnce(&mut T)) {
        f(&mut self.current);
    }

    pub fn is_dirty(&self) -> bool {
        self.current != self.baseline
    }

    pub fn discard(&mut self) {
        self.current = self.baseline.clone();
    }

    /// Adopt `confirmed` as the new baseline and reset the working copy to it.
    pub fn commit(&mut self, confirmed: T) {
        self.baseline = confirmed;
        self.current = self.baseline.clone();
    }

    /// Commit the server response merged over the working copy. The response
    /// may be a different shape than the form, e.g. a profile for its form.
    pub fn commit_merged<R>(&mut self, response: R, merge: impl FnOnce(&T, R) -> T) {
        let merged = merge(&self.current, response);
        self.commit(merged);
    }
}
