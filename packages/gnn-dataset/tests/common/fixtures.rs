//! Dataset directory fixtures

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Temporary data directory; files are written only when set
pub struct DatasetFixture {
    dir: TempDir,
}

impl DatasetFixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(self, name: &str, lines: &[&str]) -> Self {
        let mut content = lines.join("\n");
        content.push('\n');
        fs::write(self.dir.path().join(name), content).unwrap();
        self
    }

    pub fn docs(self, lines: &[&str]) -> Self {
        self.file("docs.txt", lines)
    }

    pub fn labels(self, lines: &[&str]) -> Self {
        self.file("labels.txt", lines)
    }

    pub fn adjedges(self, lines: &[&str]) -> Self {
        self.file("adjedges.txt", lines)
    }

    pub fn edgelist(self, lines: &[&str]) -> Self {
        self.file("edgelist.txt", lines)
    }
}

/// Two documents, two labels, one adjacency line naming a node without a document
pub fn fixture_two_docs() -> DatasetFixture {
    DatasetFixture::new()
        .docs(&["n1 the cat sat", "n2 the dog ran"])
        .labels(&["n1 L0", "n2 L1"])
        .adjedges(&["n1 n2 n3"])
}

/// Small citation-style graph with `n` documents in a ring, two classes
pub fn fixture_ring(n: usize) -> DatasetFixture {
    let docs: Vec<String> = (0..n)
        .map(|i| {
            let topic = if i % 2 == 0 { "text" } else { "vision" };
            format!("p{} paper {} about graphs and {}", i, i, topic)
        })
        .collect();
    let labels: Vec<String> = (0..n).map(|i| format!("p{} C{}", i, i % 2)).collect();
    let adjedges: Vec<String> = (0..n).map(|i| format!("p{} p{}", i, (i + 1) % n)).collect();

    DatasetFixture::new()
        .docs(&as_refs(&docs))
        .labels(&as_refs(&labels))
        .adjedges(&as_refs(&adjedges))
}

fn as_refs(lines: &[String]) -> Vec<&str> {
    lines.iter().map(String::as_str).collect()
}
