// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `vcs` namespace.

use crate::registry::{Deprecated::*, Entry, Stability::*};

/// The ID of the change (pull request/merge request/changelist) if applicable. This is usually a unique (within repository) identifier generated by the VCS system.
///
/// Type: `string`. Examples: `"123"`.
#[cfg(feature = "semconv_experimental")]
pub const VCS_CHANGE_ID: &str = "vcs.change.id";

/// The state of the change (pull request/merge request/changelist).
///
/// Type: `string`. Examples: `"open"`, `"closed"`, `"merged"`.
#[cfg(feature = "semconv_experimental")]
pub const VCS_CHANGE_STATE: &str = "vcs.change.state";

/// Open means the change is currently active and under review. It hasn't been merged into the target branch yet, and it's still possible to make changes or add comments.
#[cfg(feature = "semconv_experimental")]
pub const VCS_CHANGE_STATE_VALUE_OPEN: &str = "open";

/// WIP (work-in-progress, draft) means the change is still in progress and not yet ready for a full review. It might still undergo significant changes.
#[cfg(feature = "semconv_experimental")]
pub const VCS_CHANGE_STATE_VALUE_WIP: &str = "wip";

/// Closed means the merge request has been closed without merging.
#[cfg(feature = "semconv_experimental")]
pub const VCS_CHANGE_STATE_VALUE_CLOSED: &str = "closed";

/// Merged indicates that the change has been successfully integrated into the target codebase.
#[cfg(feature = "semconv_experimental")]
pub const VCS_CHANGE_STATE_VALUE_MERGED: &str = "merged";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`VCS_CHANGE_STATE`].
    VcsChangeState for VCS_CHANGE_STATE {
        /// Open means the change is currently active and under review. It hasn't been merged into the target branch yet, and it's still possible to make changes or add comments.
        Open = "open",
        /// WIP (work-in-progress, draft) means the change is still in progress and not yet ready for a full review. It might still undergo significant changes.
        Wip = "wip",
        /// Closed means the merge request has been closed without merging.
        Closed = "closed",
        /// Merged indicates that the change has been successfully integrated into the target codebase.
        Merged = "merged",
    }
}

/// The human readable title of the change (pull request/merge request/changelist). This title is often a brief summary of the change and may get merged in to a ref as the commit summary.
///
/// Type: `string`. Examples: `"Fixes broken thing"`, `"feat: add my new feature"`, `[chore] update dependency`.
#[cfg(feature = "semconv_experimental")]
pub const VCS_CHANGE_TITLE: &str = "vcs.change.title";

/// The type of line change being measured on a branch or change.
///
/// Type: `string`. Examples: `"added"`, `"removed"`.
#[cfg(feature = "semconv_experimental")]
pub const VCS_LINE_CHANGE_TYPE: &str = "vcs.line_change.type";

/// How many lines were added.
#[cfg(feature = "semconv_experimental")]
pub const VCS_LINE_CHANGE_TYPE_VALUE_ADDED: &str = "added";

/// How many lines were removed.
#[cfg(feature = "semconv_experimental")]
pub const VCS_LINE_CHANGE_TYPE_VALUE_REMOVED: &str = "removed";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`VCS_LINE_CHANGE_TYPE`].
    VcsLineChangeType for VCS_LINE_CHANGE_TYPE {
        /// How many lines were added.
        Added = "added",
        /// How many lines were removed.
        Removed = "removed",
    }
}

/// The group owner within the version control system.
///
/// Type: `string`. Examples: `"my-org"`, `"myteam"`, `"business-unit"`.
#[cfg(feature = "semconv_experimental")]
pub const VCS_OWNER_NAME: &str = "vcs.owner.name";

/// The name of the version control system provider.
///
/// Type: `string`. Examples: `"github"`, `"gitlab"`, `"gitea"`, `"bitbucket"`.
#[cfg(feature = "semconv_experimental")]
pub const VCS_PROVIDER_NAME: &str = "vcs.provider.name";

/// GitHub
#[cfg(feature = "semconv_experimental")]
pub const VCS_PROVIDER_NAME_VALUE_GITHUB: &str = "github";

/// GitLab
#[cfg(feature = "semconv_experimental")]
pub const VCS_PROVIDER_NAME_VALUE_GITLAB: &str = "gitlab";

/// Deprecated, use `gitea` instead.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `gitea`.")]
pub const VCS_PROVIDER_NAME_VALUE_GITTEA: &str = "gittea";

/// Gitea
#[cfg(feature = "semconv_experimental")]
pub const VCS_PROVIDER_NAME_VALUE_GITEA: &str = "gitea";

/// Bitbucket
#[cfg(feature = "semconv_experimental")]
pub const VCS_PROVIDER_NAME_VALUE_BITBUCKET: &str = "bitbucket";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`VCS_PROVIDER_NAME`].
    VcsProviderName for VCS_PROVIDER_NAME {
        /// GitHub
        Github = "github",
        /// GitLab
        Gitlab = "gitlab",
        /// Deprecated, use `gitea` instead.
        ///
        /// Deprecated: Replaced by `gitea`.
        Gittea = "gittea",
        /// Gitea
        Gitea = "gitea",
        /// Bitbucket
        Bitbucket = "bitbucket",
    }
}

/// The name of the reference such as **branch** or **tag** in the repository.
///
/// Type: `string`. Examples: `"my-feature-branch"`, `"tag-1-test"`.
#[cfg(feature = "semconv_experimental")]
pub const VCS_REF_BASE_NAME: &str = "vcs.ref.base.name";

/// The revision, literally revised version, The revision most often refers to a commit object in Git, or a revision number in SVN.
///
/// Type: `string`. Examples: `"9d59409acf479dfa0df1aa568182e43e43df8bbe28d60fcf2bc52e30068802cc"`, `"main"`, `"123"`, `"HEAD"`.
#[cfg(feature = "semconv_experimental")]
pub const VCS_REF_BASE_REVISION: &str = "vcs.ref.base.revision";

/// The type of the reference in the repository.
///
/// Type: `string`. Examples: `"branch"`, `"tag"`.
#[cfg(feature = "semconv_experimental")]
pub const VCS_REF_BASE_TYPE: &str = "vcs.ref.base.type";

/// branch
#[cfg(feature = "semconv_experimental")]
pub const VCS_REF_BASE_TYPE_VALUE_BRANCH: &str = "branch";

/// tag
#[cfg(feature = "semconv_experimental")]
pub const VCS_REF_BASE_TYPE_VALUE_TAG: &str = "tag";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`VCS_REF_BASE_TYPE`].
    VcsRefBaseType for VCS_REF_BASE_TYPE {
        /// branch
        Branch = "branch",
        /// tag
        Tag = "tag",
    }
}

/// The name of the reference such as **branch** or **tag** in the repository.
///
/// Type: `string`. Examples: `"my-feature-branch"`, `"tag-1-test"`.
#[cfg(feature = "semconv_experimental")]
pub const VCS_REF_HEAD_NAME: &str = "vcs.ref.head.name";

/// The revision, literally revised version, The revision most often refers to a commit object in Git, or a revision number in SVN.
///
/// Type: `string`. Examples: `"9d59409acf479dfa0df1aa568182e43e43df8bbe28d60fcf2bc52e30068802cc"`, `"main"`, `"123"`, `"HEAD"`.
#[cfg(feature = "semconv_experimental")]
pub const VCS_REF_HEAD_REVISION: &str = "vcs.ref.head.revision";

/// The type of the reference in the repository.
///
/// Type: `string`. Examples: `"branch"`, `"tag"`.
#[cfg(feature = "semconv_experimental")]
pub const VCS_REF_HEAD_TYPE: &str = "vcs.ref.head.type";

/// branch
#[cfg(feature = "semconv_experimental")]
pub const VCS_REF_HEAD_TYPE_VALUE_BRANCH: &str = "branch";

/// tag
#[cfg(feature = "semconv_experimental")]
pub const VCS_REF_HEAD_TYPE_VALUE_TAG: &str = "tag";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`VCS_REF_HEAD_TYPE`].
    VcsRefHeadType for VCS_REF_HEAD_TYPE {
        /// branch
        Branch = "branch",
        /// tag
        Tag = "tag",
    }
}

/// The type of the reference in the repository.
///
/// Type: `string`. Examples: `"branch"`, `"tag"`.
#[cfg(feature = "semconv_experimental")]
pub const VCS_REF_TYPE: &str = "vcs.ref.type";

/// branch
#[cfg(feature = "semconv_experimental")]
pub const VCS_REF_TYPE_VALUE_BRANCH: &str = "branch";

/// tag
#[cfg(feature = "semconv_experimental")]
pub const VCS_REF_TYPE_VALUE_TAG: &str = "tag";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`VCS_REF_TYPE`].
    VcsRefType for VCS_REF_TYPE {
        /// branch
        Branch = "branch",
        /// tag
        Tag = "tag",
    }
}

/// Deprecated, use `vcs.change.id` instead.
///
/// Type: `string`. Examples: `"123"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `vcs.change.id`.")]
pub const VCS_REPOSITORY_CHANGE_ID: &str = "vcs.repository.change.id";

/// Deprecated, use `vcs.change.title` instead.
///
/// Type: `string`. Examples: `"Fixes broken thing"`, `"feat: add my new feature"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `vcs.change.title`.")]
pub const VCS_REPOSITORY_CHANGE_TITLE: &str = "vcs.repository.change.title";

/// The human readable name of the repository. It SHOULD NOT include any additional identifier like Group/SubGroup in GitLab or organization in GitHub.
///
/// Type: `string`. Examples: `"semantic-conventions"`, `"my-cool-repo"`.
#[cfg(feature = "semconv_experimental")]
pub const VCS_REPOSITORY_NAME: &str = "vcs.repository.name";

/// Deprecated, use `vcs.ref.head.name` instead.
///
/// Type: `string`. Examples: `"my-feature-branch"`, `"tag-1-test"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `vcs.ref.head.name`.")]
pub const VCS_REPOSITORY_REF_NAME: &str = "vcs.repository.ref.name";

/// Deprecated, use `vcs.ref.head.revision` instead.
///
/// Type: `string`. Examples: `"9d59409acf479dfa0df1aa568182e43e43df8bbe28d60fcf2bc52e30068802cc"`, `"main"`, `"123"`, `"HEAD"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `vcs.ref.head.revision`.")]
pub const VCS_REPOSITORY_REF_REVISION: &str = "vcs.repository.ref.revision";

/// Deprecated, use `vcs.ref.head.type` instead.
///
/// Type: `string`. Examples: `"branch"`, `"tag"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `vcs.ref.head.type`.")]
pub const VCS_REPOSITORY_REF_TYPE: &str = "vcs.repository.ref.type";

/// branch
#[cfg(feature = "semconv_experimental")]
pub const VCS_REPOSITORY_REF_TYPE_VALUE_BRANCH: &str = "branch";

/// tag
#[cfg(feature = "semconv_experimental")]
pub const VCS_REPOSITORY_REF_TYPE_VALUE_TAG: &str = "tag";

/// The canonical URL of the repository providing the complete HTTP(S) address in order to locate and identify the repository through a browser.
///
/// Type: `string`. Examples: `"https://github.com/opentelemetry/open-telemetry-collector-contrib"`, `"https://gitlab.com/my-org/my-project/my-projects-project/repo"`.
#[cfg(feature = "semconv_experimental")]
pub const VCS_REPOSITORY_URL_FULL: &str = "vcs.repository.url.full";

/// The type of revision comparison.
///
/// Type: `string`. Examples: `"ahead"`, `"behind"`.
#[cfg(feature = "semconv_experimental")]
pub const VCS_REVISION_DELTA_DIRECTION: &str = "vcs.revision_delta.direction";

/// How many revisions the change is behind the target ref.
#[cfg(feature = "semconv_experimental")]
pub const VCS_REVISION_DELTA_DIRECTION_VALUE_BEHIND: &str = "behind";

/// How many revisions the change is ahead of the target ref.
#[cfg(feature = "semconv_experimental")]
pub const VCS_REVISION_DELTA_DIRECTION_VALUE_AHEAD: &str = "ahead";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`VCS_REVISION_DELTA_DIRECTION`].
    VcsRevisionDeltaDirection for VCS_REVISION_DELTA_DIRECTION {
        /// How many revisions the change is behind the target ref.
        Behind = "behind",
        /// How many revisions the change is ahead of the target ref.
        Ahead = "ahead",
    }
}

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("VCS_CHANGE_ID", "vcs.change.id", Experimental),
    Entry::attribute("VCS_CHANGE_STATE", "vcs.change.state", Experimental),
    Entry::value("VCS_CHANGE_STATE_VALUE_OPEN", "vcs.change.state", "open", Experimental),
    Entry::value("VCS_CHANGE_STATE_VALUE_WIP", "vcs.change.state", "wip", Experimental),
    Entry::value("VCS_CHANGE_STATE_VALUE_CLOSED", "vcs.change.state", "closed", Experimental),
    Entry::value("VCS_CHANGE_STATE_VALUE_MERGED", "vcs.change.state", "merged", Experimental),
    Entry::attribute("VCS_CHANGE_TITLE", "vcs.change.title", Experimental),
    Entry::attribute("VCS_LINE_CHANGE_TYPE", "vcs.line_change.type", Experimental),
    Entry::value("VCS_LINE_CHANGE_TYPE_VALUE_ADDED", "vcs.line_change.type", "added", Experimental),
    Entry::value(
        "VCS_LINE_CHANGE_TYPE_VALUE_REMOVED",
        "vcs.line_change.type",
        "removed",
        Experimental,
    ),
    Entry::attribute("VCS_OWNER_NAME", "vcs.owner.name", Experimental),
    Entry::attribute("VCS_PROVIDER_NAME", "vcs.provider.name", Experimental),
    Entry::value("VCS_PROVIDER_NAME_VALUE_GITHUB", "vcs.provider.name", "github", Experimental),
    Entry::value("VCS_PROVIDER_NAME_VALUE_GITLAB", "vcs.provider.name", "gitlab", Experimental),
    Entry::value("VCS_PROVIDER_NAME_VALUE_GITTEA", "vcs.provider.name", "gittea", Experimental)
        .deprecated(Renamed("gitea")),
    Entry::value("VCS_PROVIDER_NAME_VALUE_GITEA", "vcs.provider.name", "gitea", Experimental),
    Entry::value(
        "VCS_PROVIDER_NAME_VALUE_BITBUCKET",
        "vcs.provider.name",
        "bitbucket",
        Experimental,
    ),
    Entry::attribute("VCS_REF_BASE_NAME", "vcs.ref.base.name", Experimental),
    Entry::attribute("VCS_REF_BASE_REVISION", "vcs.ref.base.revision", Experimental),
    Entry::attribute("VCS_REF_BASE_TYPE", "vcs.ref.base.type", Experimental),
    Entry::value("VCS_REF_BASE_TYPE_VALUE_BRANCH", "vcs.ref.base.type", "branch", Experimental),
    Entry::value("VCS_REF_BASE_TYPE_VALUE_TAG", "vcs.ref.base.type", "tag", Experimental),
    Entry::attribute("VCS_REF_HEAD_NAME", "vcs.ref.head.name", Experimental),
    Entry::attribute("VCS_REF_HEAD_REVISION", "vcs.ref.head.revision", Experimental),
    Entry::attribute("VCS_REF_HEAD_TYPE", "vcs.ref.head.type", Experimental),
    Entry::value("VCS_REF_HEAD_TYPE_VALUE_BRANCH", "vcs.ref.head.type", "branch", Experimental),
    Entry::value("VCS_REF_HEAD_TYPE_VALUE_TAG", "vcs.ref.head.type", "tag", Experimental),
    Entry::attribute("VCS_REF_TYPE", "vcs.ref.type", Experimental),
    Entry::value("VCS_REF_TYPE_VALUE_BRANCH", "vcs.ref.type", "branch", Experimental),
    Entry::value("VCS_REF_TYPE_VALUE_TAG", "vcs.ref.type", "tag", Experimental),
    Entry::attribute("VCS_REPOSITORY_CHANGE_ID", "vcs.repository.change.id", Experimental)
        .deprecated(Renamed("vcs.change.id")),
    Entry::attribute("VCS_REPOSITORY_CHANGE_TITLE", "vcs.repository.change.title", Experimental)
        .deprecated(Renamed("vcs.change.title")),
    Entry::attribute("VCS_REPOSITORY_NAME", "vcs.repository.name", Experimental),
    Entry::attribute("VCS_REPOSITORY_REF_NAME", "vcs.repository.ref.name", Experimental)
        .deprecated(Renamed("vcs.ref.head.name")),
    Entry::attribute("VCS_REPOSITORY_REF_REVISION", "vcs.repository.ref.revision", Experimental)
        .deprecated(Renamed("vcs.ref.head.revision")),
    Entry::attribute("VCS_REPOSITORY_REF_TYPE", "vcs.repository.ref.type", Experimental)
        .deprecated(Renamed("vcs.ref.head.type")),
    Entry::value(
        "VCS_REPOSITORY_REF_TYPE_VALUE_BRANCH",
        "vcs.repository.ref.type",
        "branch",
        Experimental,
    ),
    Entry::value(
        "VCS_REPOSITORY_REF_TYPE_VALUE_TAG",
        "vcs.repository.ref.type",
        "tag",
        Experimental,
    ),
    Entry::attribute("VCS_REPOSITORY_URL_FULL", "vcs.repository.url.full", Experimental),
    Entry::attribute("VCS_REVISION_DELTA_DIRECTION", "vcs.revision_delta.direction", Experimental),
    Entry::value(
        "VCS_REVISION_DELTA_DIRECTION_VALUE_BEHIND",
        "vcs.revision_delta.direction",
        "behind",
        Experimental,
    ),
    Entry::value(
        "VCS_REVISION_DELTA_DIRECTION_VALUE_AHEAD",
        "vcs.revision_delta.direction",
        "ahead",
        Experimental,
    ),
];
