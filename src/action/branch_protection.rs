//! Default-branch protection helper.

use super::context::ActionLogger;
use crate::github::{BranchProtectionRules, GitHubResult, RepoPlatform};

/// GitHub refuses branch protection on private repositories of free plans
/// with a message containing this text.
const PAID_PLAN_REQUIRED: &str = "Upgrade to GitHub Pro or make this repository public";

/// Protect `default_branch` of `owner/repo_name`.
///
/// Requires one approving review (optionally from a code owner), an
/// up-to-date branch before merging, and applies the rules to admins.
/// A refusal because the plan lacks the feature is logged and not an error.
pub async fn enable_branch_protection_on_default_branch<P: RepoPlatform>(
    owner: &str,
    client: &P,
    repo_name: &str,
    logger: &ActionLogger,
    default_branch: &str,
    require_code_owner_reviews: bool,
) -> GitHubResult<()> {
    let rules = BranchProtectionRules::new(require_code_owner_reviews);

    match client
        .update_branch_protection(owner, repo_name, default_branch, &rules)
        .await
    {
        Ok(()) => {
            logger.debug(format_args!(
                "Enabled branch protection on {owner}/{repo_name}@{default_branch}"
            ));
            Ok(())
        }
        Err(e)
            if e
                .api_message()
                .is_some_and(|message| message.contains(PAID_PLAN_REQUIRED)) =>
        {
            logger.warn(
                "Branch protection was not enabled as it requires GitHub Pro for private repositories",
            );
            Ok(())
        }
        Err(e) => Err(e),
    }
}
