/// Cached label text for one axis.
///
/// Static labels set by the host take precedence over generated ones and
/// survive invalidation; generated labels are dropped whenever viewport,
/// data, or plot dimensions change.
#[derive(Debug, Clone, Default)]
pub(super) struct LabelCache {
    generated: Option<Vec<String>>,
    fixed: Option<Vec<String>>,
}

impl LabelCache {
    pub(super) fn resolve(&self) -> Option<&[String]> {
        self.fixed.as_deref().or(self.generated.as_deref())
    }

    pub(super) fn store_generated(&mut self, labels: Vec<String>) {
        self.generated = Some(labels);
    }

    pub(super) fn invalidate(&mut self) {
        self.generated = None;
    }

    pub(super) fn set_fixed(&mut self, labels: Option<Vec<String>>) {
        self.fixed = labels;
    }
}
