// src/presentation/render.rs
use crate::application::dto::ArticleView;
use tera::{Context, Tera};

/// Markup fragment listing articles, as embedded in host pages by the
/// widget endpoint. Degraded views render with their synthesized title and
/// an `--unresolved` modifier class. Route paths come from the routing
/// layer, not from editors, so the href skips autoescaping; everything
/// editor-controlled (title, teaser) stays escaped.
const ARTICLE_LIST_TEMPLATE: &str = r#"<ul class="article-list">
{%- for article in articles %}
  <li class="article-list__item{% if article.error %} article-list__item--unresolved{% endif %}">
    {%- if article.url %}
    <a class="article-list__link" href="{{ article.url | safe }}">{{ article.title }}</a>
    {%- else %}
    <span class="article-list__title">{{ article.title }}</span>
    {%- endif %}
    {%- if article.teaser %}
    <p class="article-list__teaser">{{ article.teaser }}</p>
    {%- endif %}
  </li>
{%- endfor %}
</ul>
"#;

pub struct ArticleListRenderer {
    tera: Tera,
}

impl ArticleListRenderer {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template("article_list.html", ARTICLE_LIST_TEMPLATE)?;
        Ok(Self { tera })
    }

    pub fn render_list(&self, articles: &[ArticleView]) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("articles", articles);
        self.tera.render("article_list.html", &context)
    }
}
