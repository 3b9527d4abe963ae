// ABOUTME: Additional resources shown after the guide steps

use super::steps::Link;

/// One expandable topic in the resources panel
#[derive(Debug, Clone, Copy)]
pub struct ResourceTopic {
    pub title: &'static str,
    pub body: &'static str,
    pub link: Link,
}

pub static RESOURCE_TOPICS: &[ResourceTopic] = &[
    ResourceTopic {
        title: "Custom Domains",
        body: "Add your custom domain in Project Settings → Domains. Vercel automatically \
               provisions SSL certificates.",
        link: Link {
            label: "Learn more about custom domains",
            url: "https://vercel.com/docs/concepts/projects/custom-domains",
        },
    },
    ResourceTopic {
        title: "Performance Monitoring",
        body: "Vercel provides built-in analytics to monitor your app's performance, including \
               Core Web Vitals and real user metrics.",
        link: Link {
            label: "Learn about Analytics",
            url: "https://vercel.com/docs/concepts/analytics",
        },
    },
    ResourceTopic {
        title: "Serverless Functions",
        body: "Next.js API Routes are automatically deployed as serverless functions on Vercel, \
               scaling automatically with your traffic.",
        link: Link {
            label: "Learn about Serverless Functions",
            url: "https://vercel.com/docs/concepts/functions/serverless-functions",
        },
    },
];

/// Links shown at the bottom of the resources panel
pub static FOOTER_LINKS: &[Link] = &[
    Link {
        label: "Deploy Now",
        url: "https://vercel.com/new",
    },
    Link {
        label: "Next.js Docs",
        url: "https://nextjs.org/docs",
    },
];
