// 🌐 HTML visualizer - standalone page with tabs and client-side search

use crate::dataset::Dataset;
use chrono::{DateTime, Local};

const STYLE: &str = r#"
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: 'Arial', sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh; color: #333; padding: 20px;
        }
        .container { max-width: 1200px; margin: 0 auto; }
        .header, .content {
            background: rgba(255, 255, 255, 0.95); border-radius: 15px; padding: 30px;
            box-shadow: 0 8px 32px rgba(0, 0, 0, 0.1);
        }
        .header { margin-bottom: 30px; text-align: center; }
        .stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 20px; margin: 20px 0; }
        .stat-card { background: linear-gradient(45deg, #667eea, #764ba2); color: white; padding: 20px; border-radius: 10px; }
        .stat-number { font-size: 2em; font-weight: bold; }
        .nav-tabs { display: flex; gap: 10px; margin-bottom: 30px; border-bottom: 2px solid #eee; }
        .tab { padding: 12px 24px; background: #f8f9fa; border: none; border-radius: 8px 8px 0 0; cursor: pointer; font-weight: 500; }
        .tab.active { background: linear-gradient(45deg, #667eea, #764ba2); color: white; }
        .tab-content { display: none; }
        .tab-content.active { display: block; }
        .profile-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(350px, 1fr)); gap: 20px; }
        .profile-card {
            background: white; border-radius: 15px; padding: 20px;
            box-shadow: 0 5px 20px rgba(0, 0, 0, 0.1); border-left: 5px solid #667eea;
        }
        .profile-header { display: flex; align-items: center; gap: 15px; margin-bottom: 15px; }
        .profile-pic { width: 60px; height: 60px; border-radius: 50%; object-fit: cover; border: 3px solid #667eea; }
        .company-logo {
            width: 60px; height: 60px; background: rgba(255,255,255,0.2); border-radius: 10px;
            display: flex; align-items: center; justify-content: center; color: white; font-weight: bold; font-size: 18px;
        }
        .profile-name { font-size: 18px; font-weight: bold; }
        .profile-title { color: #667eea; font-size: 14px; }
        .profile-meta { color: #666; font-size: 12px; margin-top: 5px; }
        .profile-details { display: grid; grid-template-columns: 1fr 1fr; gap: 10px; margin-top: 15px; font-size: 13px; }
        .detail-item { padding: 8px; background: #f8f9ff; border-radius: 6px; }
        .detail-item.wide { grid-column: span 2; }
        .detail-label { font-weight: bold; color: #764ba2; }
        .company-card { background: linear-gradient(45deg, #28a745, #20c997); color: white; border-left: 5px solid #155724; }
        .search-box { width: 100%; padding: 12px; border: 2px solid #667eea; border-radius: 25px; font-size: 16px; margin-bottom: 20px; }
        @media (max-width: 768px) {
            .profile-grid { grid-template-columns: 1fr; }
            .nav-tabs { flex-direction: column; }
        }
"#;

const SCRIPT: &str = r#"
        function showTab(tabName, button) {
            document.querySelectorAll('.tab-content').forEach(tab => tab.classList.remove('active'));
            document.querySelectorAll('.tab').forEach(tab => tab.classList.remove('active'));
            document.getElementById(tabName).classList.add('active');
            button.classList.add('active');
        }
        function searchProfiles(query) {
            const q = query.toLowerCase();
            document.querySelectorAll('.profile-card').forEach(card => {
                card.style.display = card.textContent.toLowerCase().includes(q) ? 'block' : 'none';
            });
        }
"#;

/// Escape text for element content and double-quoted attributes
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn detail(label: &str, value: &str) -> String {
    format!(
        r#"<div class="detail-item"><div class="detail-label">{}:</div>{}</div>"#,
        label,
        escape_html(value)
    )
}

fn wide_detail(label: &str, value: &str) -> String {
    format!(
        r#"<div class="detail-item wide"><div class="detail-label">{}:</div>{}</div>"#,
        label,
        escape_html(value)
    )
}

fn card_header(id_attr: &str, id: &str, class: &str, avatar: &str, name: &str, title: &str, meta: &str) -> String {
    format!(
        r#"<div class="{}" {}="{}"><div class="profile-header">{}<div><div class="profile-name">{}</div><div class="profile-title">{}</div><div class="profile-meta">{}</div></div></div>"#,
        class,
        id_attr,
        escape_html(id),
        avatar,
        escape_html(name),
        escape_html(title),
        escape_html(meta)
    )
}

fn profile_cards(dataset: &Dataset) -> String {
    let mut cards = String::new();

    for p in &dataset.profiles {
        let social = dataset.social_for(p);
        let avatar = format!(
            r#"<img src="{}" alt="{}" class="profile-pic">"#,
            escape_html(&p.profile_pic),
            escape_html(&p.full_name)
        );

        cards.push_str(&card_header(
            "data-person-id",
            &p.id,
            "profile-card",
            &avatar,
            &p.full_name,
            &p.job_title,
            &format!("{} • {}", p.company, p.city),
        ));
        cards.push_str(r#"<div class="profile-details">"#);
        cards.push_str(&detail("Email", &p.email));
        cards.push_str(&detail("Age", &format!("{} years old", p.age)));
        cards.push_str(&detail("University", &p.university));
        cards.push_str(&detail("LinkedIn", &format!("{} connections", p.linkedin_connections)));
        cards.push_str(&detail("Posts", &social.map(|s| s.posts).unwrap_or(0).to_string()));
        cards.push_str(&detail("Followers", &social.map(|s| s.followers).unwrap_or(0).to_string()));
        cards.push_str("</div></div>");
    }

    cards
}

fn company_cards(dataset: &Dataset) -> String {
    let mut cards = String::new();

    for company in &dataset.companies {
        let employees: Vec<&str> = dataset
            .employees_of(company)
            .map(|p| p.full_name.as_str())
            .collect();
        let initial: String = company.name.chars().take(1).collect();
        let avatar = format!(r#"<div class="company-logo">{}</div>"#, escape_html(&initial));

        cards.push_str(&card_header(
            "data-company-id",
            &company.id,
            "profile-card company-card",
            &avatar,
            &company.name,
            &company.industry,
            &format!("{} • {} employees", company.location, employees.len()),
        ));

        let mut recent = employees.iter().take(3).copied().collect::<Vec<_>>().join(", ");
        if employees.len() > 3 {
            recent.push_str(&format!(" and {} more", employees.len() - 3));
        }

        cards.push_str(r#"<div class="profile-details">"#);
        cards.push_str(&detail("Size", &company.size));
        cards.push_str(&detail("Website", &company.website));
        cards.push_str(&detail("Departments", &company.departments.len().to_string()));
        cards.push_str(&wide_detail("Recent Employees", &recent));
        cards.push_str("</div></div>");
    }

    cards
}

/// `MM/DD` of an RFC 3339 timestamp, or the raw value if unparseable
fn short_date(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.format("%m/%d").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

fn social_cards(dataset: &Dataset) -> String {
    let mut cards = String::new();

    for p in &dataset.profiles {
        let Some(social) = dataset.social_for(p) else {
            continue;
        };
        let avatar = format!(
            r#"<img src="{}" alt="{}" class="profile-pic">"#,
            escape_html(&p.profile_pic),
            escape_html(&p.full_name)
        );
        let handle = format!("@{}{}", p.first_name.to_lowercase(), p.last_name.to_lowercase());

        cards.push_str(&card_header(
            "data-person-id",
            &p.id,
            "profile-card",
            &avatar,
            &handle,
            &p.full_name,
            &format!("{} followers • {} posts", social.followers, social.posts),
        ));

        let mut links = String::from("LinkedIn, Twitter");
        if p.social_profiles.github.is_some() {
            links.push_str(", GitHub");
        }

        cards.push_str(r#"<div class="profile-details">"#);
        cards.push_str(&detail("Posts", &social.posts.to_string()));
        cards.push_str(&detail("Followers", &social.followers.to_string()));
        cards.push_str(&detail("Following", &social.following.to_string()));
        cards.push_str(&detail("Last Active", &short_date(&social.last_active)));
        cards.push_str(&wide_detail("Social Links", &links));
        cards.push_str("</div></div>");
    }

    cards
}

pub fn render_html(dataset: &Dataset, now: DateTime<Local>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>OSINT Profiles Visualizer</title>
    <style>{style}</style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>OSINT Profiles Visualizer</h1>
            <p>Generated on {generated}</p>
            <div class="stats">
                <div class="stat-card"><div class="stat-number">{profiles}</div><div class="stat-label">Total Profiles</div></div>
                <div class="stat-card"><div class="stat-number">{companies}</div><div class="stat-label">Companies</div></div>
                <div class="stat-card"><div class="stat-number">{socials}</div><div class="stat-label">Social Profiles</div></div>
            </div>
        </div>
        <div class="content">
            <div class="nav-tabs">
                <button class="tab active" onclick="showTab('profiles', this)">Individual Profiles</button>
                <button class="tab" onclick="showTab('companies', this)">Companies</button>
                <button class="tab" onclick="showTab('social', this)">Social Media</button>
            </div>
            <input type="text" class="search-box" placeholder="Search profiles..." onkeyup="searchProfiles(this.value)">
            <div id="profiles" class="tab-content active"><div class="profile-grid">{profile_cards}</div></div>
            <div id="companies" class="tab-content"><div class="profile-grid">{company_cards}</div></div>
            <div id="social" class="tab-content"><div class="profile-grid">{social_cards}</div></div>
        </div>
    </div>
    <script>{script}</script>
</body>
</html>
"#,
        style = STYLE,
        generated = now.format("%Y-%m-%d %H:%M:%S"),
        profiles = dataset.profiles.len(),
        companies = dataset.companies.len(),
        socials = dataset.social_profiles.len(),
        profile_cards = profile_cards(dataset),
        company_cards = company_cards(dataset),
        social_cards = social_cards(dataset),
        script = SCRIPT,
    )
}
