use axum::{
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};

use crate::state::AppState;

pub fn create_static_router() -> Router<AppState> {
    Router::new()
        .route("/static/css/main.css", get(serve_main_css))
        .route("/static/js/index.js", get(serve_index_js))
}

async fn serve_main_css() -> impl IntoResponse {
    let css = r##"
        body { margin: 0; font-family: -apple-system, "Segoe UI", Roboto, sans-serif; color: #222; }
        .navbar { display: flex; justify-content: space-between; padding: 12px 24px; background: #1a1a2e; }
        .navbar a { color: #ddd; text-decoration: none; margin-left: 16px; }
        .navbar a.active, .navbar .brand { color: #fff; font-weight: 600; }
        .alert-warning { padding: 12px 24px; background: #fff3cd; color: #856404; }
        .container { max-width: 1100px; margin: 0 auto; padding: 24px; }
        .summary { display: flex; gap: 16px; }
        .card { flex: 1; padding: 16px; border: 1px solid #e3e3e3; border-radius: 6px; }
        .card-label { font-size: 12px; color: #777; text-transform: uppercase; }
        .card-value { font-size: 24px; font-weight: 600; }
        .series { margin: 8px 0; }
        .table { width: 100%; border-collapse: collapse; }
        .table th, .table td { padding: 8px; border-bottom: 1px solid #eee; text-align: left; }
        .footer { padding: 16px 24px; font-size: 12px; color: #999; }
    "##;

    ([(header::CONTENT_TYPE, "text/css")], css)
}

async fn serve_index_js() -> impl IntoResponse {
    let js = r##"
        // Groups the embedded statistics by indicator and draws one sparkline each.
        (function () {
            var container = document.getElementById('statistics-chart');
            if (!container) { return; }

            var rows = JSON.parse(container.dataset.series || 'null') || [];
            var series = {};
            rows.forEach(function (row) {
                (series[row.indicator] = series[row.indicator] || []).push(row);
            });

            Object.keys(series).sort().forEach(function (indicator) {
                var points = series[indicator];
                var max = Math.max.apply(null, points.map(function (p) { return p.value; }));
                var width = 600, height = 60;
                var step = points.length > 1 ? width / (points.length - 1) : 0;
                var path = points.map(function (p, i) {
                    return (i === 0 ? 'M' : 'L') + (i * step).toFixed(1) + ' ' +
                        (height - (p.value / max) * height).toFixed(1);
                }).join(' ');

                var block = document.createElement('div');
                block.className = 'series';
                var label = document.createElement('div');
                label.className = 'card-label';
                label.textContent = indicator + ' (' + points[points.length - 1].value + ')';
                block.appendChild(label);
                block.insertAdjacentHTML('beforeend',
                    '<svg width="' + width + '" height="' + height + '">' +
                    '<path d="' + path + '" fill="none" stroke="#3b6ea5" stroke-width="2"/></svg>');
                container.appendChild(block);
            });
        })();
    "##;

    ([(header::CONTENT_TYPE, "application/javascript")], js)
}
