///
/// The value column of an annotation result table. Membership mode holds a
/// boolean per position; distance mode holds the distance to the nearest
/// merged interval, or `None` when the chromosome has no intervals at all.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationValues {
    Membership(Vec<bool>),
    Distance(Vec<Option<u32>>),
}

impl AnnotationValues {
    pub fn len(&self) -> usize {
        match self {
            AnnotationValues::Membership(v) => v.len(),
            AnnotationValues::Distance(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

///
/// One annotation result table: a `value` per position, aligned with `pos`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationTable {
    pub pos: Vec<u32>,
    pub values: AnnotationValues,
}

impl AnnotationTable {
    pub fn new(pos: Vec<u32>, values: AnnotationValues) -> Self {
        debug_assert_eq!(pos.len(), values.len());
        AnnotationTable { pos, values }
    }

    pub fn len(&self) -> usize {
        self.pos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }
}
