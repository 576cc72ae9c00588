//! Query page
//!
//! Single inline-HTML page: one query box, one button, and a report
//! region re-rendered from the SSE stream. Once a run finishes, the
//! final report can be emailed from the page.

use axum::response::Html;

/// Serve the query page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>DeepBrief — Research Briefings</title>
    <script src="https://cdn.jsdelivr.net/npm/marked@12/marked.min.js"></script>
    <style>
        body {
            font-family: Inter, system-ui, sans-serif;
            max-width: 52em;
            margin: 0 auto;
            padding: 2rem 1rem;
            color: #1e293b;
            background: #f8fafc;
        }
        .app-title {
            text-align: center;
            font-size: 2.2rem;
            font-weight: 800;
            color: #0ea5e9;
            margin-bottom: 0.5rem;
        }
        .app-subtitle {
            text-align: center;
            color: #64748b;
            margin-bottom: 2rem;
        }
        textarea {
            width: 100%;
            box-sizing: border-box;
            min-height: 4.5rem;
            padding: 0.75rem;
            border: 1px solid #cbd5e1;
            border-radius: 0.5rem;
            font: inherit;
        }
        button {
            margin-top: 0.75rem;
            padding: 0.7rem 1.4rem;
            border: none;
            border-radius: 0.5rem;
            background: #0ea5e9;
            color: white;
            font-weight: 600;
            font-size: 1rem;
            cursor: pointer;
        }
        button:disabled {
            background: #94a3b8;
            cursor: not-allowed;
        }
        #email-btn {
            background: #6366f1;
            display: none;
        }
        #report {
            margin-top: 1.5rem;
            padding: 1rem;
            border-radius: 0.5rem;
            background: white;
            box-shadow: 0 2px 6px rgba(0,0,0,0.08);
            min-height: 6rem;
            overflow-y: auto;
        }
        #status {
            margin-top: 0.75rem;
            color: #64748b;
            font-size: 0.9rem;
        }
    </style>
</head>
<body>
    <div class="app-title">DeepBrief</div>
    <div class="app-subtitle">Ask for a research briefing on any topic and watch the report build.</div>

    <textarea id="query" placeholder="e.g. Future of quantum computing…"></textarea>
    <div>
        <button id="run-btn" onclick="runResearch()">Start research</button>
        <button id="email-btn" onclick="emailReport()">Email this report</button>
    </div>
    <div id="status"></div>
    <div id="report"></div>

    <script>
        let finalReport = null;

        function setStatus(text) {
            document.getElementById('status').textContent = text;
        }

        function renderChunk(content) {
            document.getElementById('report').innerHTML = marked.parse(content);
        }

        async function runResearch() {
            const query = document.getElementById('query').value;
            const runBtn = document.getElementById('run-btn');
            const emailBtn = document.getElementById('email-btn');

            finalReport = null;
            emailBtn.style.display = 'none';
            runBtn.disabled = true;
            setStatus('Researching…');

            try {
                const res = await fetch('/v1/research/stream', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ query: query }),
                });

                if (!res.ok) {
                    const body = await res.json();
                    setStatus('Error: ' + body.error);
                    return;
                }

                const reader = res.body.getReader();
                const decoder = new TextDecoder();
                let buffer = '';
                let latest = '';

                for (;;) {
                    const { done, value } = await reader.read();
                    if (done) break;
                    buffer += decoder.decode(value, { stream: true });

                    const frames = buffer.split('\n\n');
                    buffer = frames.pop();
                    for (const frame of frames) {
                        for (const line of frame.split('\n')) {
                            if (!line.startsWith('data:')) continue;
                            const event = JSON.parse(line.slice(5));
                            latest = event.content;
                            renderChunk(latest);
                            if (event.done) {
                                finalReport = latest;
                            }
                        }
                    }
                }

                if (finalReport !== null) {
                    emailBtn.style.display = 'inline-block';
                    setStatus('Report finished.');
                } else {
                    setStatus('Stream ended.');
                }
            } catch (err) {
                setStatus('Error: ' + err.message);
            } finally {
                runBtn.disabled = false;
            }
        }

        async function emailReport() {
            if (finalReport === null) return;
            setStatus('Sending email…');

            const res = await fetch('/v1/reports/email', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({ report: finalReport }),
            });
            const body = await res.json();

            if (body.status === 'success') {
                setStatus('Email sent (' + body.message_id + ').');
            } else {
                setStatus('Email failed: ' + (body.reason || body.error));
            }
        }

        document.getElementById('query').addEventListener('keydown', (e) => {
            if (e.key === 'Enter' && !e.shiftKey) {
                e.preventDefault();
                runResearch();
            }
        });
    </script>
</body>
</html>
"#;
