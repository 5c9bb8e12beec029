//! Landing page with the URL form

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Non-Polish Text Extractor</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 0; background-color: #f5f5f5; }
        .container { max-width: 640px; margin: 60px auto; background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
        h1 { color: #333; text-align: center; margin-bottom: 10px; }
        p.lead { color: #666; text-align: center; margin-bottom: 30px; }
        form { display: flex; gap: 10px; }
        input[type=text] { flex: 1; padding: 10px; border: 1px solid #ddd; border-radius: 5px; font-size: 1em; }
        button { padding: 10px 20px; background: #007bff; color: white; border: none; border-radius: 5px; font-size: 1em; cursor: pointer; }
        button:disabled { background: #9bbce0; cursor: wait; }
        #status { margin-top: 20px; padding: 15px; border-radius: 5px; display: none; }
        #status.ok { display: block; background: #e8f4f8; }
        #status.err { display: block; background: #fdecea; color: #a12622; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Non-Polish Text Extractor</h1>
        <p class="lead">Find text on a web page that is not written in Polish.</p>
        <form id="analyze">
            <input type="text" id="url" placeholder="www.example.pl" autofocus>
            <button type="submit" id="submit">Analyze</button>
        </form>
        <div id="status"></div>
    </div>
    <script>
        const form = document.getElementById('analyze');
        const status = document.getElementById('status');
        const submit = document.getElementById('submit');

        form.addEventListener('submit', async (event) => {
            event.preventDefault();
            submit.disabled = true;
            status.className = '';
            try {
                const response = await fetch('/analyze', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ url: document.getElementById('url').value })
                });
                const data = await response.json();
                if (response.ok && data.success) {
                    status.className = 'ok';
                    status.textContent = '';
                    const text = document.createElement('span');
                    text.textContent = data.message + ' Found ' + data.snippets + ' non-Polish snippet(s). ';
                    const link = document.createElement('a');
                    link.href = data.download_url;
                    link.textContent = 'Download report';
                    status.append(text, link);
                } else {
                    status.className = 'err';
                    status.textContent = data.error || 'Analysis failed';
                }
            } catch (err) {
                status.className = 'err';
                status.textContent = 'Request failed: ' + err;
            } finally {
                submit.disabled = false;
            }
        });
    </script>
</body>
</html>
"#;
