//! Server-rendered HTML pages.
//!
//! Every value interpolated here is escaped except journal content and project
//! descriptions, which are markup written by the site owner.

use crate::application::journals::get::JournalResponse;
use crate::application::journals::list::JournalListResponse;
use crate::application::projects::get::ProjectResponse;
use crate::application::users::profile::ProfileResponse;
use crate::domain::journals::Neighbours;
use crate::shared::pagination::PageQuery;
use axum::http::StatusCode;
use time::OffsetDateTime;

pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<header>
<nav><a href="/">About</a> <a href="/journals">Journals</a> <a href="/projects">Projects</a></nav>
</header>
<main>
{body}
</main>
<footer>&copy; {year}</footer>
</body>
</html>
"#,
        title = escape(title),
        year = OffsetDateTime::now_utc().year(),
    )
}

fn date(value: OffsetDateTime) -> String {
    value.date().to_string()
}

fn link_if_present(label: &str, href: Option<&str>) -> String {
    match href {
        Some(href) if !href.is_empty() => {
            format!(r#"<a href="{}">{}</a>"#, escape(href), escape(label))
        }
        _ => String::new(),
    }
}

fn neighbour_links(base: &str, neighbours: Neighbours) -> String {
    let previous = neighbours
        .previous_id
        .map(|id| format!(r#"<a rel="prev" href="{base}/{id}">&larr; Previous</a>"#))
        .unwrap_or_default();
    let next = neighbours
        .next_id
        .map(|id| format!(r#"<a rel="next" href="{base}/{id}">Next &rarr;</a>"#))
        .unwrap_or_default();
    format!(r#"<nav class="pager">{previous} {next}</nav>"#)
}

pub fn about_page(profile: &ProfileResponse) -> String {
    let mut body = format!("<h1>{}</h1>\n", escape(&profile.name));
    if let Some(bio) = &profile.bio {
        body.push_str(&format!(r#"<p class="bio">{}</p>"#, escape(bio)));
        body.push('\n');
    }
    let contacts = [
        profile
            .email
            .as_deref()
            .map(|email| link_if_present(email, Some(format!("mailto:{email}").as_str())))
            .unwrap_or_default(),
        link_if_present("GitHub", profile.github.as_deref()),
        link_if_present("LinkedIn", profile.linkedin.as_deref()),
    ];
    body.push_str(&format!(
        r#"<p class="contacts">{}</p>"#,
        contacts
            .iter()
            .filter(|c| !c.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(" ")
    ));

    layout(&profile.name, &body)
}

pub fn journals_page(list: &JournalListResponse, query: PageQuery) -> String {
    let mut body = String::from("<h1>Journals</h1>\n<ul class=\"entries\">\n");
    for journal in &list.journals {
        body.push_str(&format!(
            "<li><a href=\"/journals/{}\">{}</a> <time>{}</time></li>\n",
            journal.id,
            escape(&journal.title),
            date(journal.created_at)
        ));
    }
    if list.journals.is_empty() {
        body.push_str("<li>Nothing here yet.</li>\n");
    }
    body.push_str("</ul>\n<nav class=\"pager\">");
    if query.offset > 0 {
        let newer = (query.offset - query.limit).max(0);
        body.push_str(&format!(
            r#"<a href="/journals?limit={}&amp;offset={newer}">Newer</a> "#,
            query.limit
        ));
    }
    if list.has_more {
        body.push_str(&format!(
            r#"<a href="/journals?limit={}&amp;offset={}">Older</a>"#,
            query.limit,
            query.offset + query.limit
        ));
    }
    body.push_str("</nav>");

    layout("Journals", &body)
}

pub fn journal_page(journal: &JournalResponse, neighbours: Neighbours) -> String {
    let body = format!(
        "<article>\n<h1>{}</h1>\n<time>{}</time>\n<div class=\"content\">{}</div>\n</article>\n{}",
        escape(&journal.title),
        date(journal.created_at),
        journal.content,
        neighbour_links("/journals", neighbours)
    );

    layout(&journal.title, &body)
}

pub fn projects_page(projects: &[ProjectResponse]) -> String {
    let mut body = String::from("<h1>Projects</h1>\n<ul class=\"projects\">\n");
    for project in projects {
        body.push_str(&format!(
            "<li><a href=\"/projects/{}\">{}</a> <span class=\"status\">{}</span> {}</li>\n",
            project.id,
            escape(&project.title),
            escape(&project.status),
            tag_list(&project.tags)
        ));
    }
    if projects.is_empty() {
        body.push_str("<li>Nothing here yet.</li>\n");
    }
    body.push_str("</ul>");

    layout("Projects", &body)
}

fn tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let items: Vec<String> = tags
        .iter()
        .map(|t| format!("<li>{}</li>", escape(t)))
        .collect();
    format!(r#"<ul class="tags">{}</ul>"#, items.concat())
}

pub fn project_page(project: &ProjectResponse, neighbours: Neighbours) -> String {
    let image = project
        .image_url
        .as_deref()
        .map(|src| {
            format!(
                r#"<img src="{}" alt="{}">"#,
                escape(src),
                escape(&project.title)
            )
        })
        .unwrap_or_default();
    let body = format!(
        "<article>\n<h1>{}</h1>\n{}\n<p class=\"status\">{}</p>\n<div class=\"content\">{}</div>\n{}\n<p>{} {}</p>\n</article>\n{}",
        escape(&project.title),
        image,
        escape(&project.status),
        project.description,
        tag_list(&project.tags),
        link_if_present("Visit", project.link.as_deref()),
        link_if_present("Source", project.github.as_deref()),
        neighbour_links("/projects", neighbours)
    );

    layout(&project.title, &body)
}

pub fn admin_login_page() -> String {
    let body = r#"<h1>Admin Login</h1>
<form id="login-form">
<label>Name <input name="name" autocomplete="username" required></label>
<label>Password <input name="password" type="password" autocomplete="current-password" required></label>
<button type="submit">Log in</button>
<p id="login-error" role="alert"></p>
</form>
<script src="/static/admin.js"></script>"#;

    layout("Admin Login", body)
}

fn admin_layout(title: &str, body: &str) -> String {
    let body = format!(
        r#"<nav class="admin"><a href="/admin/dashboard">Dashboard</a> <a href="/admin/journals">Journals</a> <a href="/admin/projects">Projects</a> <a href="/admin/profile">Profile</a> <a href="/admin" id="logout">Log out</a></nav>
<p id="admin-status" role="status"></p>
{body}
<script src="/static/admin.js"></script>"#
    );

    layout(title, &body)
}

pub fn admin_dashboard_page() -> String {
    let body = r#"<h1>Admin Dashboard</h1>
<ul class="entries">
<li><a href="/admin/journals">Manage journals</a></li>
<li><a href="/admin/projects">Manage projects</a></li>
<li><a href="/admin/profile">Edit profile</a></li>
</ul>"#;

    admin_layout("Admin Dashboard", body)
}

pub fn admin_journals_page() -> String {
    let body = r#"<h1>Manage Journals</h1>
<form id="journal-form" data-endpoint="/api/journals">
<input name="id" type="hidden">
<label>Title <input name="title" required></label>
<label>Content <textarea name="content" rows="12" required></textarea></label>
<button type="submit">Save</button>
</form>
<ul class="entries" id="journal-list" data-source="/api/journals"></ul>"#;

    admin_layout("Manage Journals", body)
}

pub fn admin_projects_page() -> String {
    let body = r#"<h1>Manage Projects</h1>
<form id="project-form" data-endpoint="/api/projects">
<input name="id" type="hidden">
<label>Title <input name="title" required></label>
<label>Description <textarea name="description" rows="8" required></textarea></label>
<label>Image URL <input name="image_url"></label>
<label>Link <input name="link" required></label>
<label>GitHub <input name="github" required></label>
<label>Status <select name="status">
<option value="completed">completed</option>
<option value="in_progress">in_progress</option>
<option value="archived">archived</option>
</select></label>
<label>Tags <input name="tags" placeholder="comma separated"></label>
<button type="submit">Save</button>
</form>
<ul class="projects" id="project-list" data-source="/api/projects"></ul>"#;

    admin_layout("Manage Projects", body)
}

/// Profile form pre-filled from the owner's stored values.
pub fn admin_profile_page(profile: &ProfileResponse) -> String {
    let field = |value: &Option<String>| escape(value.as_deref().unwrap_or_default());
    let body = format!(
        r#"<h1>My Profile</h1>
<form id="profile-form" data-endpoint="/api/me">
<label>Name <input name="name" value="{name}" required></label>
<label>Email <input name="email" type="email" value="{email}"></label>
<label>Bio <textarea name="bio" rows="6">{bio}</textarea></label>
<label>GitHub <input name="github" value="{github}"></label>
<label>LinkedIn <input name="linkedin" value="{linkedin}"></label>
<button type="submit">Save</button>
</form>"#,
        name = escape(&profile.name),
        email = field(&profile.email),
        bio = field(&profile.bio),
        github = field(&profile.github),
        linkedin = field(&profile.linkedin),
    );

    admin_layout("My Profile", &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>",
        status.as_u16(),
        escape(message)
    );

    layout(status.canonical_reason().unwrap_or("Error"), &body)
}
