//! instructors / students commands - Manage people records

use anyhow::Result;

use super::{block_on, confirm_delete, signed_in_engine, Context};
use crate::cli::args::PeopleAction;
use crate::core::model::{NewPerson, PersonPatch};
use crate::core::paging::PageRequest;
use crate::engine::Engine;
use crate::ui::output;

/// Which collection a people command addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeopleKind {
    Instructors,
    Students,
}

impl PeopleKind {
    fn singular(&self) -> &'static str {
        match self {
            PeopleKind::Instructors => "instructor",
            PeopleKind::Students => "student",
        }
    }
}

/// Run an instructors or students subcommand.
pub fn people(ctx: &Context, kind: PeopleKind, action: PeopleAction) -> Result<()> {
    block_on(people_async(ctx, kind, action))
}

/// Listing lines and the collection total.
async fn list(
    engine: &Engine,
    kind: PeopleKind,
    request: PageRequest,
    all: bool,
) -> Result<(Vec<String>, usize)> {
    Ok(match (kind, all) {
        (PeopleKind::Instructors, true) => {
            let items = engine.all_instructors(request.page_size).await?;
            let total = items.len();
            (items.iter().map(output::format_instructor_line).collect(), total)
        }
        (PeopleKind::Instructors, false) => {
            let page = engine.list_instructors(request).await?;
            (page.items.iter().map(output::format_instructor_line).collect(), page.total)
        }
        (PeopleKind::Students, true) => {
            let items = engine.all_students(request.page_size).await?;
            let total = items.len();
            (items.iter().map(output::format_student_line).collect(), total)
        }
        (PeopleKind::Students, false) => {
            let page = engine.list_students(request).await?;
            (page.items.iter().map(output::format_student_line).collect(), page.total)
        }
    })
}

async fn people_async(ctx: &Context, kind: PeopleKind, action: PeopleAction) -> Result<()> {
    let engine = signed_in_engine(ctx).await?;

    match action {
        PeopleAction::List {
            page,
            page_size,
            all,
        } => {
            let size = page_size.unwrap_or_else(|| ctx.config.page_size());
            let request = PageRequest::new(page, size);
            let (lines, total) = list(&engine, kind, request, all).await?;

            for line in &lines {
                println!("{}", line);
            }
            if all {
                output::print(format!("{} {}(s)", total, kind.singular()), ctx.verbosity);
            } else {
                output::print(
                    format!("page {}: {} of {} {}(s)", page, lines.len(), total, kind.singular()),
                    ctx.verbosity,
                );
            }
        }

        PeopleAction::Add { name, email } => {
            let person = NewPerson { name, email };
            let id = match kind {
                PeopleKind::Instructors => engine.create_instructor(person).await?.id,
                PeopleKind::Students => engine.create_student(person).await?.id,
            };
            output::success(format!("Added {} {}", kind.singular(), id), ctx.verbosity);
        }

        PeopleAction::Edit { id, name, email } => {
            let patch = PersonPatch { name, email };
            let line = match kind {
                PeopleKind::Instructors => {
                    output::format_instructor_line(&engine.update_instructor(&id, patch).await?)
                }
                PeopleKind::Students => {
                    output::format_student_line(&engine.update_student(&id, patch).await?)
                }
            };
            output::success(format!("Updated {}", kind.singular()), ctx.verbosity);
            println!("{}", line);
        }

        PeopleAction::Delete { id, yes } => {
            let what = format!("{} {}", kind.singular(), id);
            if !confirm_delete(ctx, &what, yes)? {
                output::print("Cancelled.", ctx.verbosity);
                return Ok(());
            }
            let deleted = match kind {
                PeopleKind::Instructors => engine.delete_instructor(&id).await?,
                PeopleKind::Students => engine.delete_student(&id).await?,
            };
            if deleted {
                output::success(format!("Deleted {}", what), ctx.verbosity);
            } else {
                output::warn(format!("No {} with id {}", kind.singular(), id), ctx.verbosity);
            }
        }
    }

    Ok(())
}
