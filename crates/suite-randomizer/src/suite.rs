//! Test tree supplied by the host framework.
//!
//! Leaf tests are opaque: the randomizer only moves them around, it never
//! inspects or runs them.

/// A node in the host's test tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestNode<T> {
    /// A single executable test.
    Test(T),
    /// A named collection of nodes.
    Suite(TestSuite<T>),
}

impl<T> TestNode<T> {
    pub fn test(test: T) -> Self {
        Self::Test(test)
    }

    pub fn suite(suite: TestSuite<T>) -> Self {
        Self::Suite(suite)
    }

    pub fn is_suite(&self) -> bool {
        matches!(self, Self::Suite(_))
    }

    pub fn as_test(&self) -> Option<&T> {
        match self {
            Self::Test(t) => Some(t),
            Self::Suite(_) => None,
        }
    }

    pub fn as_suite(&self) -> Option<&TestSuite<T>> {
        match self {
            Self::Suite(s) => Some(s),
            Self::Test(_) => None,
        }
    }

    pub fn as_suite_mut(&mut self) -> Option<&mut TestSuite<T>> {
        match self {
            Self::Suite(s) => Some(s),
            Self::Test(_) => None,
        }
    }

    /// Number of leaf tests at or below this node.
    pub fn count(&self) -> usize {
        match self {
            Self::Test(_) => 1,
            Self::Suite(s) => s.count(),
        }
    }
}

impl<T> From<TestSuite<T>> for TestNode<T> {
    fn from(suite: TestSuite<T>) -> Self {
        Self::Suite(suite)
    }
}

/// An ordered collection of tests and nested suites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSuite<T> {
    name: String,
    tests: Vec<TestNode<T>>,
}

impl<T> TestSuite<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tests: Vec::new(),
        }
    }

    pub fn with_tests(mut self, tests: impl IntoIterator<Item = TestNode<T>>) -> Self {
        self.tests.extend(tests);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current children, in run order.
    pub fn tests(&self) -> &[TestNode<T>] {
        &self.tests
    }

    /// Replaces the children wholesale.
    pub fn set_tests(&mut self, tests: Vec<TestNode<T>>) {
        self.tests = tests;
    }

    /// Removes and returns all children, leaving the suite empty.
    pub fn take_tests(&mut self) -> Vec<TestNode<T>> {
        std::mem::take(&mut self.tests)
    }

    pub fn push(&mut self, node: TestNode<T>) {
        self.tests.push(node);
    }

    pub fn push_test(&mut self, test: T) {
        self.tests.push(TestNode::Test(test));
    }

    pub fn push_suite(&mut self, suite: TestSuite<T>) {
        self.tests.push(TestNode::Suite(suite));
    }

    /// True if the suite has no direct children.
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Number of leaf tests at any depth.
    pub fn count(&self) -> usize {
        self.tests.iter().map(TestNode::count).sum()
    }

    /// True if every direct child is a leaf test.
    pub fn is_flat(&self) -> bool {
        !self.tests.iter().any(TestNode::is_suite)
    }

    /// Consumes the suite and returns its leaf tests in depth-first order.
    pub fn into_flattened(self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.count());
        flatten_owned(self.tests, &mut out);
        out
    }
}

/// Borrows every leaf test reachable from `suite`, depth-first, in the order
/// they are encountered. Suite boundaries are dropped.
pub fn flatten<T>(suite: &TestSuite<T>) -> Vec<&T> {
    fn walk<'a, T>(nodes: &'a [TestNode<T>], out: &mut Vec<&'a T>) {
        for node in nodes {
            match node {
                TestNode::Test(t) => out.push(t),
                TestNode::Suite(s) => walk(&s.tests, out),
            }
        }
    }

    let mut out = Vec::with_capacity(suite.count());
    walk(&suite.tests, &mut out);
    out
}

pub(crate) fn flatten_owned<T>(nodes: Vec<TestNode<T>>, out: &mut Vec<T>) {
    for node in nodes {
        match node {
            TestNode::Test(t) => out.push(t),
            TestNode::Suite(s) => flatten_owned(s.tests, out),
        }
    }
}
