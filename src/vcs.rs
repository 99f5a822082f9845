use anyhow::{Context, Result, anyhow};
use git2::{Oid, Repository};
use std::path::{Path, PathBuf};

//

pub struct VcsContext {
    pub repo: Repository,
}

impl VcsContext {
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path).context("open git repo")?;
        Ok(Self { repo })
    }

    pub fn resolve_oid(&self, rev: &str) -> Result<Oid> {
        let obj = self
            .repo
            .revparse_single(rev)
            .with_context(|| format!("resolve rev {rev}"))?;
        Ok(obj.id())
    }

    pub fn head_oid(&self) -> Result<Oid> {
        let head = self.repo.head()?;
        head.target()
            .ok_or_else(|| anyhow!("detached HEAD not supported"))
    }

    pub fn merge_base(&self, a: Oid, b: Oid) -> Result<Oid> {
        let base = self.repo.merge_base(a, b).context("merge-base")?;
        Ok(base)
    }

    /// Merge-base of the current HEAD and `branch`, the commit the
    /// formatting script diffs against. Read-only query.
    pub fn merge_base_with_head(&self, branch: &str) -> Result<Oid> {
        let head = self.head_oid()?;
        let other = self.resolve_oid(branch)?;
        self.merge_base(head, other)
    }

    pub fn workdir(&self) -> Result<PathBuf> {
        self.repo
            .workdir()
            .map(Path::to_path_buf)
            .ok_or_else(|| anyhow!("bare repository has no work tree"))
    }
}
