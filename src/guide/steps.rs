// ABOUTME: Static catalog of deployment guide steps
// Content is fixed at compile time and never mutated

use serde::Serialize;

/// Stable identifier of a guide step (1-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StepId(pub u8);

impl std::fmt::Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One instructional unit in the guide
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Step {
    pub id: StepId,
    pub title: &'static str,
    pub description: &'static str,
    pub blocks: &'static [ContentBlock],
}

/// A copyable command snippet with a stable identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub id: &'static str,
    pub command: &'static str,
}

/// An external documentation link
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

/// A titled entry in an ordered list
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ListEntry {
    pub title: &'static str,
    pub body: &'static str,
}

/// One pane of a tabbed block
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Tab {
    pub label: &'static str,
    pub blocks: &'static [ContentBlock],
}

/// A small labelled panel (step 5's URL cards)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
}

/// Display structure of step content
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentBlock {
    Paragraph(&'static str),
    Snippet(Snippet),
    /// Callout box with optional body lines and bullet items
    Note {
        title: &'static str,
        body: &'static [&'static str],
        bullets: &'static [&'static str],
    },
    Numbered(&'static [ListEntry]),
    Cards(&'static [Card]),
    Tabs(&'static [Tab]),
    Links(&'static [Link]),
}

static STEPS: &[Step] = &[
    Step {
        id: StepId(1),
        title: "Create Your Next.js Project",
        description: "Set up a new Next.js application",
        blocks: &[
            ContentBlock::Paragraph(
                "First, create a new Next.js application using create-next-app. This will set \
                 up everything you need with recommended configurations.",
            ),
            ContentBlock::Snippet(Snippet {
                id: "create-app",
                command: "npx create-next-app@latest my-app",
            }),
            ContentBlock::Note {
                title: "During setup, you'll be asked:",
                body: &[],
                bullets: &[
                    "TypeScript? → Yes (recommended)",
                    "ESLint? → Yes",
                    "Tailwind CSS? → Yes",
                    "App Router? → Yes",
                ],
            },
            ContentBlock::Snippet(Snippet {
                id: "cd-app",
                command: "cd my-app\nnpm run dev",
            }),
        ],
    },
    Step {
        id: StepId(2),
        title: "Initialize Git Repository",
        description: "Set up version control for your project",
        blocks: &[
            ContentBlock::Paragraph(
                "Vercel integrates seamlessly with Git providers. Initialize a Git repository \
                 and push your code to GitHub, GitLab, or Bitbucket.",
            ),
            ContentBlock::Snippet(Snippet {
                id: "git-init",
                command: "git init\ngit add .\ngit commit -m \"Initial commit\"",
            }),
            ContentBlock::Paragraph("Create a new repository on GitHub and push your code:"),
            ContentBlock::Snippet(Snippet {
                id: "git-push",
                command: "git remote add origin https://github.com/username/my-app.git\n\
                          git branch -M main\n\
                          git push -u origin main",
            }),
        ],
    },
    Step {
        id: StepId(3),
        title: "Deploy to Vercel",
        description: "Connect your repository and deploy",
        blocks: &[ContentBlock::Tabs(&[
            Tab {
                label: "Vercel Dashboard",
                blocks: &[
                    ContentBlock::Numbered(&[
                        ListEntry {
                            title: "Visit Vercel",
                            body: "Go to vercel.com and sign up or log in with your Git provider",
                        },
                        ListEntry {
                            title: "Import Project",
                            body: "Click \"Add New Project\" and import your Git repository",
                        },
                        ListEntry {
                            title: "Configure Settings",
                            body: "Vercel auto-detects Next.js. Review the settings and click \"Deploy\"",
                        },
                        ListEntry {
                            title: "Wait for Build",
                            body: "Vercel will build and deploy your application (usually takes 1-2 minutes)",
                        },
                    ]),
                    ContentBlock::Links(&[Link {
                        label: "vercel.com",
                        url: "https://vercel.com",
                    }]),
                ],
            },
            Tab {
                label: "Vercel CLI",
                blocks: &[
                    ContentBlock::Paragraph(
                        "Install the Vercel CLI and deploy directly from your terminal:",
                    ),
                    ContentBlock::Snippet(Snippet {
                        id: "install-cli",
                        command: "npm i -g vercel",
                    }),
                    ContentBlock::Snippet(Snippet {
                        id: "deploy-cli",
                        command: "vercel",
                    }),
                    ContentBlock::Paragraph("Follow the prompts to link your project and deploy!"),
                ],
            },
        ])],
    },
    Step {
        id: StepId(4),
        title: "Configure Environment Variables",
        description: "Set up environment variables (optional)",
        blocks: &[
            ContentBlock::Paragraph(
                "If your app uses environment variables, add them in the Vercel dashboard or \
                 via CLI.",
            ),
            ContentBlock::Note {
                title: "Via Dashboard:",
                body: &[],
                bullets: &[
                    "Go to Project Settings → Environment Variables",
                    "Add your variables (e.g., API keys, database URLs)",
                    "Choose which environments they apply to",
                ],
            },
            ContentBlock::Note {
                title: "Via CLI:",
                body: &[],
                bullets: &[],
            },
            ContentBlock::Snippet(Snippet {
                id: "env-cli",
                command: "vercel env add VARIABLE_NAME",
            }),
        ],
    },
    Step {
        id: StepId(5),
        title: "Access Your Deployed Site",
        description: "View your live application",
        blocks: &[
            ContentBlock::Paragraph(
                "Once deployed, Vercel provides you with a live URL. You'll get:",
            ),
            ContentBlock::Cards(&[
                Card {
                    title: "Production URL",
                    body: "https://my-app.vercel.app",
                },
                Card {
                    title: "Preview URLs",
                    body: "Unique URL for each branch/PR",
                },
            ]),
            ContentBlock::Note {
                title: "Automatic Deployments",
                body: &[
                    "Every push to your main branch automatically triggers a new deployment. \
                     Preview deployments are created for pull requests.",
                ],
                bullets: &[],
            },
        ],
    },
];

/// The full ordered step catalog
pub fn steps() -> &'static [Step] {
    STEPS
}

/// Look up a step by id
pub fn step(id: StepId) -> Option<&'static Step> {
    STEPS.iter().find(|s| s.id == id)
}

/// Whether an id belongs to the known catalog
pub fn contains(id: StepId) -> bool {
    step(id).is_some()
}

impl Step {
    /// Number of tab panes in this step (0 when the step has no tabbed block)
    pub fn tab_count(&self) -> usize {
        self.blocks
            .iter()
            .map(|b| match b {
                ContentBlock::Tabs(tabs) => tabs.len(),
                _ => 0,
            })
            .max()
            .unwrap_or(0)
    }

    /// Snippets visible for the given active tab, in display order
    pub fn snippets(&self, active_tab: usize) -> Vec<&'static Snippet> {
        fn collect(
            blocks: &'static [ContentBlock],
            active_tab: usize,
            out: &mut Vec<&'static Snippet>,
        ) {
            for block in blocks {
                match block {
                    ContentBlock::Snippet(snippet) => out.push(snippet),
                    ContentBlock::Tabs(tabs) => {
                        if let Some(tab) = tabs.get(active_tab) {
                            collect(tab.blocks, active_tab, out);
                        }
                    }
                    _ => {}
                }
            }
        }

        let mut out = Vec::new();
        collect(self.blocks, active_tab, &mut out);
        out
    }

    /// All snippets across every tab, in display order
    pub fn all_snippets(&self) -> Vec<&'static Snippet> {
        fn collect(blocks: &'static [ContentBlock], out: &mut Vec<&'static Snippet>) {
            for block in blocks {
                match block {
                    ContentBlock::Snippet(snippet) => out.push(snippet),
                    ContentBlock::Tabs(tabs) => {
                        for tab in *tabs {
                            collect(tab.blocks, out);
                        }
                    }
                    _ => {}
                }
            }
        }

        let mut out = Vec::new();
        collect(self.blocks, &mut out);
        out
    }
}
