//! posts command - List, read, publish, edit and delete posts

use anyhow::Result;

use super::{block_on, confirm_delete, signed_in_engine, Context};
use crate::cli::args::PostsAction;
use crate::core::model::PostPatch;
use crate::core::validate::PostFields;
use crate::engine::filter_posts;
use crate::ui::output;

/// Run a posts subcommand.
pub fn posts(ctx: &Context, action: PostsAction) -> Result<()> {
    block_on(posts_async(ctx, action))
}

async fn posts_async(ctx: &Context, action: PostsAction) -> Result<()> {
    let engine = signed_in_engine(ctx).await?;

    match action {
        PostsAction::List { search, mine } => {
            let posts = if mine {
                engine.own_posts().await?
            } else {
                engine.list_posts().await?
            };
            let posts = match search.as_deref() {
                Some(query) => filter_posts(posts, query),
                None => posts,
            };

            if posts.is_empty() {
                output::print("No posts found.", ctx.verbosity);
            }
            for post in &posts {
                println!("{}", output::format_post_line(post));
            }
        }

        PostsAction::Show { id } => {
            let post = engine.get_post(&id).await?;
            println!("{}", output::format_post(&post));
        }

        PostsAction::Create {
            title,
            description,
            body,
        } => {
            let post = engine
                .create_post(PostFields {
                    title,
                    description,
                    body,
                })
                .await?;
            output::success(format!("Created post {}", post.id), ctx.verbosity);
        }

        PostsAction::Edit {
            id,
            title,
            description,
            body,
        } => {
            let patch = PostPatch {
                title,
                description,
                body,
                author: None,
            };
            let post = engine.edit_post(&id, patch).await?;
            output::success(format!("Updated post {}", post.id), ctx.verbosity);
        }

        PostsAction::Delete { id, yes } => {
            if !confirm_delete(ctx, &format!("post {}", id), yes)? {
                output::print("Cancelled.", ctx.verbosity);
                return Ok(());
            }
            if engine.delete_post(&id).await? {
                output::success(format!("Deleted post {}", id), ctx.verbosity);
            } else {
                output::warn(format!("No post with id {}", id), ctx.verbosity);
            }
        }
    }

    Ok(())
}
