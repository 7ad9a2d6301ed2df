// Server-side rendering of the landing page
//
// Every interactive control renders as a link whose query string is the page
// state after that control is activated.
use crate::application::page_session::{PageQuery, PageSession};
use crate::domain::catalog::{
    self, ARCHITECTURE, BRAND, CONSOLE_ACTIONS, CONTACT_PERKS, FAQ, FEATURES, FOOTER_NOTE, Feature,
    GAUGES, HERO, HERO_POINTS, HERO_STATS, MILESTONES, NAV, PHONE_ACTIONS, SCENARIOS, SERIES,
    SPEC_ROWS, TAGLINE,
};
use crate::domain::chart::{ChartSpec, Orientation, PlotBox, water_quality_chart};
use crate::domain::telemetry::WATER_QUALITY;
use crate::domain::toggle::ConsoleFeature;
use std::fmt::Write as _;

const CHART_WIDTH: f64 = 480.0;
const CHART_HEIGHT: f64 = 180.0;
const CHART_PLOT: PlotBox = PlotBox::new(44.0, 12.0, 392.0, 140.0);

const STYLE: &str = r#"
*{box-sizing:border-box}
body{margin:0;min-height:100vh;color:#fff;font-family:system-ui,-apple-system,"PingFang SC",sans-serif;
  background:linear-gradient(135deg,#0891b2,#1d4ed8 55%,#3730a3)}
a{color:inherit}
.section{max-width:80rem;margin:0 auto;padding:3rem 1.5rem}
.glass{backdrop-filter:blur(24px);background:rgba(255,255,255,.05);border:1px solid rgba(255,255,255,.1);border-radius:1rem}
.card{padding:1.5rem}
.grid{display:grid;gap:1rem;grid-template-columns:repeat(auto-fit,minmax(16rem,1fr))}
header{position:sticky;top:0;z-index:40;background:rgba(0,0,0,.3);backdrop-filter:blur(12px)}
header .section{display:flex;align-items:center;justify-content:space-between;padding-top:1rem;padding-bottom:1rem}
nav a{margin-left:1.5rem;text-decoration:none;opacity:.9}
.badge{display:inline-block;border-radius:999px;padding:.1rem .6rem;font-size:.75rem;background:rgba(255,255,255,.2)}
.badge.live{background:rgba(34,197,94,.8)}
.button{display:inline-flex;align-items:center;justify-content:center;border:0;border-radius:.75rem;padding:.6rem 1rem;
  background:#3b82f6;color:#fff;font-size:.875rem;text-decoration:none;cursor:pointer}
.button.secondary{background:rgba(255,255,255,.2)}
.button:disabled{opacity:.5;cursor:not-allowed}
.stat{padding:1rem}
.stat .value{font-size:1.5rem;font-weight:600}
.muted{color:rgba(255,255,255,.8)}
.faint{color:rgba(255,255,255,.6);font-size:.75rem}
.tabs{display:inline-flex;padding:.25rem}
.tab{padding:.4rem .8rem;border-radius:.25rem;text-decoration:none;color:rgba(255,255,255,.7)}
.tab[aria-selected="true"]{background:rgba(255,255,255,.1);color:#fff}
.switch-row{display:flex;align-items:center;justify-content:space-between;padding:.75rem}
.switch{display:inline-flex;width:2.75rem;height:1.5rem;border-radius:999px;background:rgba(255,255,255,.3);padding:2px}
.switch[aria-checked="true"]{background:#3b82f6}
.switch .thumb{width:1.25rem;height:1.25rem;border-radius:999px;background:#fff;transition:transform .2s}
.switch[aria-checked="true"] .thumb{transform:translateX(1.25rem)}
.progress{height:.5rem;border-radius:999px;background:rgba(255,255,255,.2);overflow:hidden}
.progress .bar{height:100%;background:#3b82f6}
.phone{max-width:300px;aspect-ratio:9/19;margin:0 auto;border:2px solid rgba(255,255,255,.1);border-radius:2.2rem;background:#000;padding:.5rem}
.phone .screen{height:100%;border-radius:2rem;background:#171717;display:grid;grid-template-rows:auto 1fr auto;overflow:hidden}
table{width:100%;border-collapse:collapse;font-size:.875rem}
th,td{text-align:left;padding:.75rem;border-bottom:1px solid rgba(255,255,255,.1)}
.faq-item{border-bottom:1px solid rgba(255,255,255,.1)}
.faq-trigger{display:flex;justify-content:space-between;padding:1rem 0;text-decoration:none;font-weight:500}
.faq-content{padding-bottom:1rem;color:rgba(255,255,255,.8);font-size:.875rem}
footer{border-top:1px solid rgba(255,255,255,.1);margin-top:3rem}
"#;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

fn href(query: &PageQuery, anchor: &str) -> String {
    let qs = query.to_query_string();
    let path = if qs.is_empty() { "/".to_string() } else { format!("/{qs}") };
    escape(&format!("{path}#{anchor}"))
}

pub fn render_landing(session: &PageSession, year: i32) -> String {
    let mut html = String::with_capacity(32 * 1024);
    let _ = write!(
        html,
        "<!DOCTYPE html><html lang=\"zh-CN\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\
         <title>{} · {}</title><style>{STYLE}</style></head><body><main>",
        escape(BRAND),
        escape(TAGLINE)
    );
    render_header(&mut html, session);
    render_hero(&mut html);
    render_features(&mut html);
    render_models(&mut html, session);
    render_console(&mut html, session);
    render_architecture(&mut html);
    render_specs(&mut html);
    render_milestones(&mut html);
    render_contact(&mut html);
    render_faq(&mut html, session);
    render_footer(&mut html, year);
    html.push_str("</main></body></html>");
    html
}

fn render_header(html: &mut String, session: &PageSession) {
    let _ = write!(
        html,
        "<header><div class=\"section\"><div><strong>{}</strong> <span class=\"badge\">{}</span></div><nav>",
        escape(BRAND),
        escape(TAGLINE)
    );
    for link in &NAV {
        let _ = write!(html, "<a href=\"#{}\">{}</a>", link.anchor, escape(link.label));
    }
    html.push_str("</nav>");
    // the demo booking flow needs the assistant; without a token it stays inert
    if session.assistant_available() {
        html.push_str("<a id=\"assistant\" class=\"button\" href=\"#contact\">预订演示</a>");
    } else {
        html.push_str(
            "<button id=\"assistant\" class=\"button\" type=\"button\" disabled \
             title=\"助手暂不可用\">预订演示</button>",
        );
    }
    html.push_str("</div></header>");
}

fn render_hero(html: &mut String) {
    let _ = write!(
        html,
        "<section class=\"section\"><div class=\"grid\"><div><h1>{}<br>{}</h1><p class=\"muted\">{}</p>\
         <p><a class=\"button\" href=\"#console\">立即体验</a> \
         <a class=\"button secondary\" href=\"#specs\">下载白皮书</a></p><div class=\"grid\">",
        escape(HERO.headline),
        escape(HERO.highlight),
        escape(HERO.lead)
    );
    for stat in &HERO_STATS {
        let _ = write!(
            html,
            "<div class=\"glass stat\"><div class=\"value\">{}</div><div class=\"muted\">{}</div>",
            escape(stat.value),
            escape(stat.label)
        );
        if let Some(sub) = stat.sub {
            let _ = write!(html, "<div class=\"faint\">{}</div>", escape(sub));
        }
        html.push_str("</div>");
    }
    html.push_str("</div></div><div class=\"glass card\"><div class=\"muted\">AR 第一视角</div>");
    render_chart(html, &water_quality_chart());
    html.push_str("<ul>");
    for point in &HERO_POINTS {
        let _ = write!(html, "<li>{}</li>", escape(point));
    }
    html.push_str("</ul></div></div></section>");
}

fn render_chart(html: &mut String, chart: &ChartSpec) {
    let _ = write!(
        html,
        "<figure><svg role=\"img\" viewBox=\"0 0 {CHART_WIDTH} {CHART_HEIGHT}\" width=\"100%\" \
         aria-label=\"{}\">",
        escape(chart.caption)
    );
    let bottom = CHART_PLOT.y + CHART_PLOT.height;
    for axis in &chart.y_axes {
        let (x, anchor) = match axis.orientation {
            Orientation::Left => (CHART_PLOT.x - 6.0, "end"),
            Orientation::Right => (CHART_PLOT.x + CHART_PLOT.width + 6.0, "start"),
        };
        for value in [axis.domain.min, axis.domain.max] {
            let y = CHART_PLOT.value_y(&axis.domain, value);
            let _ = write!(
                html,
                "<text x=\"{x:.1}\" y=\"{y:.1}\" fill=\"#9ca3af\" font-size=\"12\" \
                 text-anchor=\"{anchor}\" dominant-baseline=\"middle\">{value:.1}</text>"
            );
        }
    }
    for (i, reading) in WATER_QUALITY.iter().enumerate() {
        let x = CHART_PLOT.category_x(i, WATER_QUALITY.len());
        let _ = write!(
            html,
            "<text x=\"{x:.1}\" y=\"{:.1}\" fill=\"#9ca3af\" font-size=\"12\" \
             text-anchor=\"middle\">{}</text>",
            bottom + 18.0,
            escape(reading.time_label)
        );
    }
    for line in &chart.lines {
        let _ = write!(
            html,
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"><title>{}</title></path>",
            chart.path(line, &WATER_QUALITY, &CHART_PLOT),
            line.color,
            line.stroke_width,
            escape(line.name)
        );
    }
    let _ = write!(
        html,
        "</svg><figcaption class=\"faint\">{}</figcaption></figure>",
        escape(chart.caption)
    );
}

fn render_cards(html: &mut String, cards: &[Feature]) {
    html.push_str("<div class=\"grid\">");
    for card in cards {
        let _ = write!(
            html,
            "<div class=\"glass card\"><h3>{}</h3><p class=\"muted\">{}</p></div>",
            escape(card.title),
            escape(card.body)
        );
    }
    html.push_str("</div>");
}

fn render_features(html: &mut String) {
    html.push_str(
        "<section id=\"features\" class=\"section\"><h2>核心功能矩阵</h2>\
         <p class=\"muted\">将繁琐养护转化为沉浸互动与无人化运维。</p>",
    );
    render_cards(html, &FEATURES);
    html.push_str("</section>");
}

fn render_models(html: &mut String, session: &PageSession) {
    html.push_str(
        "<section id=\"models\" class=\"section\"><h2>产品系列与款式</h2>\
         <div class=\"glass tabs\" role=\"tablist\">",
    );
    for series in &SERIES {
        let selected = session.series.is_active(&series.id.to_string());
        let _ = write!(
            html,
            "<a class=\"tab\" role=\"tab\" aria-selected=\"{selected}\" href=\"{}\">{}</a>",
            href(&session.link_for_series(series.id), "models"),
            escape(series.label)
        );
    }
    html.push_str("</div><div class=\"grid\" role=\"tabpanel\">");
    // an unregistered series has no panel and shows no products
    let active = match session.series.active() {
        Some(id) if session.series.has_panel() => id.as_str(),
        _ => "",
    };
    for product in catalog::products_in(active) {
        let _ = write!(
            html,
            "<div class=\"glass card\"><h3>{}</h3><p class=\"muted\">{}</p><ul>",
            escape(product.name),
            escape(product.summary)
        );
        for highlight in &product.highlights {
            let _ = write!(html, "<li>{}</li>", escape(highlight));
        }
        html.push_str("</ul><a class=\"button secondary\" href=\"#contact\">了解更多</a></div>");
    }
    html.push_str("</div></section>");
}

fn render_console(html: &mut String, session: &PageSession) {
    html.push_str(
        "<section id=\"console\" class=\"section\"><div class=\"grid\"><div>\
         <h2>实时控制台 · Demo</h2><p class=\"muted\">模拟核心能力开关与水质监控。</p>\
         <div class=\"glass card\"><div class=\"grid\">",
    );
    for feature in ConsoleFeature::ALL {
        let view = session.console.view(feature);
        let _ = write!(
            html,
            "<div class=\"glass switch-row\"><span>{}</span>\
             <a class=\"switch\" role=\"{}\" aria-checked=\"{}\" href=\"{}\" \
             data-feature=\"{}\"><span class=\"thumb\"></span></a></div>",
            escape(feature.label()),
            view.role,
            view.aria_checked,
            href(&session.link_for_switch(feature), "console"),
            feature.query_key()
        );
    }
    html.push_str("</div>");
    for gauge in &GAUGES {
        let _ = write!(
            html,
            "<div><p><span>{}</span> <span class=\"muted\">{}</span></p>\
             <div class=\"progress\"><div class=\"bar\" style=\"width:{}%\"></div></div></div>",
            escape(gauge.label),
            escape(gauge.reading),
            gauge.percent.min(100)
        );
    }
    html.push_str("</div><p>");
    for action in &CONSOLE_ACTIONS {
        let _ = write!(html, "<button class=\"button secondary\" type=\"button\">{}</button> ", escape(action));
    }
    let _ = write!(
        html,
        "</p></div><div class=\"phone\"><div class=\"screen\">\
         <div class=\"switch-row\"><span class=\"faint\">EcoMimic • Live</span><span class=\"badge live\">在线</span></div>\
         <div aria-label=\"AR View\" data-ar=\"{}\"></div><div class=\"switch-row\">",
        session.console.ar_view
    );
    for action in &PHONE_ACTIONS {
        let _ = write!(html, "<button class=\"button secondary\" type=\"button\">{}</button>", escape(action));
    }
    html.push_str("</div></div></div></div></section>");
}

fn render_architecture(html: &mut String) {
    html.push_str(
        "<section class=\"section\"><h2>分布式 AI 架构</h2>\
         <p class=\"muted\">GD32H7（实时控制） + RK3588S（AI/应用） + ESP32‑S3（仿生鱼端）。</p>",
    );
    render_cards(html, &ARCHITECTURE);
    html.push_str("</section>");
}

fn render_specs(html: &mut String) {
    html.push_str(
        "<section id=\"specs\" class=\"section\"><h2>关键规格</h2><div class=\"glass\"><table>\
         <thead><tr><th>类别</th><th>参数</th><th>说明</th></tr></thead><tbody>",
    );
    for row in &SPEC_ROWS {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td class=\"muted\">{}</td></tr>",
            escape(row.category),
            escape(row.parameter),
            escape(row.note)
        );
    }
    html.push_str("</tbody></table></div></section>");
}

fn render_milestones(html: &mut String) {
    html.push_str("<section class=\"section\"><h2>从 1.0 到 3.0 的进化</h2><div class=\"grid\">");
    for milestone in &MILESTONES {
        let _ = write!(
            html,
            "<div class=\"glass card\"><h3>{}</h3><p class=\"muted\">{}</p><span class=\"badge\">{}</span></div>",
            escape(milestone.version),
            escape(milestone.summary),
            escape(milestone.badge)
        );
    }
    html.push_str("</div></section>");
}

fn render_contact(html: &mut String) {
    html.push_str(
        "<section id=\"contact\" class=\"section\"><div class=\"glass card grid\"><div>\
         <h3>预约线下演示 / 获取报价</h3>\
         <p class=\"muted\">提交信息，我们将在 1 个工作日内联系您，提供场景化方案建议与试用名额。</p><ul>",
    );
    for perk in &CONTACT_PERKS {
        let _ = write!(html, "<li>{}</li>", escape(perk));
    }
    html.push_str(
        "</ul></div><form onsubmit=\"return false\">\
         <label for=\"name\">联系人</label><input id=\"name\" placeholder=\"您的姓名\">\
         <label for=\"email\">邮箱</label><input id=\"email\" type=\"email\" placeholder=\"name@example.com\">\
         <fieldset><legend>应用场景</legend>",
    );
    for (i, scenario) in SCENARIOS.iter().enumerate() {
        let _ = write!(
            html,
            "<label><input type=\"checkbox\" id=\"scene-{i}\"> {}</label> ",
            escape(scenario)
        );
    }
    html.push_str(
        "</fieldset><label for=\"notes\">备注</label>\
         <input id=\"notes\" placeholder=\"期望功能/交付时间/预算范围等\">\
         <button class=\"button\" type=\"submit\">提交</button></form></div></section>",
    );
}

fn render_faq(html: &mut String, session: &PageSession) {
    html.push_str("<section id=\"faq\" class=\"section\"><h2>常见问题</h2><div>");
    for entry in &FAQ {
        let open = session.faq.is_active(&entry.id.to_string());
        let _ = write!(
            html,
            "<div class=\"faq-item\" data-state=\"{}\"><h3><a class=\"faq-trigger\" \
             aria-expanded=\"{open}\" href=\"{}\">{}<span aria-hidden=\"true\">{}</span></a></h3>",
            if open { "open" } else { "closed" },
            href(&session.link_for_faq(entry.id), "faq"),
            escape(entry.question),
            if open { "−" } else { "+" }
        );
        if open {
            let _ = write!(html, "<div class=\"faq-content\">{}</div>", escape(entry.answer));
        }
        html.push_str("</div>");
    }
    html.push_str("</div></section>");
}

fn render_footer(html: &mut String, year: i32) {
    let _ = write!(
        html,
        "<footer><div class=\"section\"><span>© {year} EcoMimic Labs</span> \
         <span class=\"faint\">{}</span></div></footer>",
        escape(FOOTER_NOTE)
    );
}
