#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    group: TestGroup,
    shape: StreamShape,
}

impl TestCase {
    pub fn new(name: &'static str, group: TestGroup, shape: StreamShape) -> Self {
        Self { name, group, shape }
    }

    pub fn small(name: &'static str, shape: StreamShape) -> Self {
        Self::new(name, TestGroup::Small, shape)
    }

    pub fn normal(name: &'static str, shape: StreamShape) -> Self {
        Self::new(name, TestGroup::Normal, shape)
    }

    pub fn large(name: &'static str, shape: StreamShape) -> Self {
        Self::new(name, TestGroup::Large, shape)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> TestGroup {
        self.group
    }

    pub fn shape(&self) -> &StreamShape {
        &self.shape
    }
}

/// Shape of one synthetic request body stream: how many fragments arrive and
/// how large each one is.
#[derive(Debug, Copy, Clone)]
pub struct StreamShape {
    chunk_len: usize,
    chunk_count: usize,
}

impl StreamShape {
    pub const fn new(chunk_len: usize, chunk_count: usize) -> Self {
        Self { chunk_len, chunk_count }
    }

    pub fn chunk_len(&self) -> usize {
        self.chunk_len
    }

    pub fn chunk_count(&self) -> usize {
        self.chunk_count
    }

    pub fn total_len(&self) -> usize {
        self.chunk_len * self.chunk_count
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TestGroup {
    Small,
    Normal,
    Large,
}
