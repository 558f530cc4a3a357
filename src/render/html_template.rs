//! Style and script blocks for the HTML dashboard.

/// CSS for both themes; the active one is picked by `data-theme` on `<html>`.
pub const HTML_STYLES: &str = r#"    <style>
        :root, [data-theme="dark"] {
            --color-bg: #0f172a;
            --color-card: #1e293b;
            --color-border: #334155;
            --color-text: #f8fafc;
            --color-text-muted: #94a3b8;
            --color-positive: #22c55e;
            --color-negative: #ef4444;
            --color-accent: #3b82f6;
        }
        [data-theme="light"] {
            --color-bg: #f8fafc;
            --color-card: #ffffff;
            --color-border: #e2e8f0;
            --color-text: #1e293b;
            --color-text-muted: #64748b;
            --color-positive: #16a34a;
            --color-negative: #dc2626;
            --color-accent: #2563eb;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: var(--color-bg);
            color: var(--color-text);
            line-height: 1.5;
            padding: 2rem;
        }
        .container { max-width: 1600px; margin: 0 auto; }
        .header { display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 1.5rem; }
        .header h1 { font-size: 1.75rem; font-weight: 700; }
        .channel-meta { color: var(--color-text-muted); font-size: 0.875rem; }
        .period { text-align: right; }
        .period .label { font-size: 0.75rem; color: var(--color-text-muted); }
        .period .value { font-weight: 600; }
        .controls { display: flex; gap: 0.5rem; margin-top: 0.5rem; justify-content: flex-end; }
        .controls button { padding: 0.375rem 0.75rem; border: 1px solid var(--color-border); background: var(--color-card); color: var(--color-text); border-radius: 0.375rem; cursor: pointer; font-size: 0.8125rem; }
        .controls button.active { background: var(--color-accent); border-color: var(--color-accent); color: #fff; }
        .kpi-grid { display: grid; grid-template-columns: repeat(6, 1fr); gap: 1rem; margin-bottom: 1.5rem; }
        .kpi-card, .chart-card, .section-card { background: var(--color-card); border: 1px solid var(--color-border); border-radius: 0.75rem; padding: 1.25rem; }
        .kpi-card .label { font-size: 0.8125rem; color: var(--color-text-muted); }
        .kpi-card .value { font-size: 1.75rem; font-weight: 700; display: block; }
        .kpi-card .detail { font-size: 0.6875rem; color: var(--color-text-muted); }
        .chart-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.5rem; margin-bottom: 1.5rem; }
        .chart-card h3 { font-size: 0.9375rem; font-weight: 600; margin-bottom: 0.5rem; }
        .chart-card svg { width: 100%; height: auto; }
        .chart-card .empty { color: var(--color-text-muted); text-align: center; padding: 4rem 0; }
        .section-card { margin-bottom: 1.5rem; }
        .section-card h2 { font-size: 1rem; font-weight: 600; margin-bottom: 1rem; }
        .network { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; }
        .network .count { font-size: 1.25rem; font-weight: 700; }
        table { width: 100%; border-collapse: collapse; }
        th, td { padding: 0.625rem 0.75rem; text-align: left; border-bottom: 1px solid var(--color-border); font-size: 0.875rem; }
        th { font-size: 0.75rem; color: var(--color-text-muted); text-transform: uppercase; letter-spacing: 0.05em; }
        tr:last-child td { border-bottom: none; }
        td.positive { color: var(--color-positive); font-weight: 600; }
        td.negative { color: var(--color-negative); font-weight: 600; }
        .post-item { display: flex; align-items: center; gap: 1rem; padding: 0.625rem 0; color: inherit; text-decoration: none; border-bottom: 1px solid var(--color-border); }
        .post-item:last-child { border-bottom: none; }
        .post-rank { font-weight: 700; width: 1.5rem; }
        .post-info { display: flex; flex-direction: column; flex: 1; }
        .post-date { font-size: 0.75rem; color: var(--color-text-muted); }
        .post-views { font-variant-numeric: tabular-nums; }
        .footer { margin-top: 2rem; padding-top: 1rem; border-top: 1px solid var(--color-border); font-size: 0.75rem; color: var(--color-text-muted); text-align: center; }
        @media print {
            body { padding: 1rem; }
            .controls { display: none; }
        }
    </style>
"#;

/// Theme toggle for the standalone page; the choice is kept in `localStorage`.
pub const HTML_SCRIPT: &str = r"    <script>
        (function() {
            const root = document.documentElement;
            const saved = localStorage.getItem('theme');
            if (saved === 'light' || saved === 'dark') {
                root.dataset.theme = saved;
            }
            const toggle = document.getElementById('theme-toggle');
            if (toggle) {
                toggle.addEventListener('click', () => {
                    const next = root.dataset.theme === 'dark' ? 'light' : 'dark';
                    root.dataset.theme = next;
                    localStorage.setItem('theme', next);
                });
            }
        })();
    </script>
";
