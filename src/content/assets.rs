/// Image and link data for one project. Entries line up with the project texts of
/// every locale bundle by position within their category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectAsset {
    pub images: &'static [&'static str],
    pub image: Option<&'static str>,
    pub link: Option<&'static str>,
}

pub type AssetTable = [(&'static str, &'static [ProjectAsset])];

const fn gallery(images: &'static [&'static str], link: Option<&'static str>) -> ProjectAsset {
    ProjectAsset {
        images,
        image: None,
        link,
    }
}

const fn single(image: &'static str) -> ProjectAsset {
    ProjectAsset {
        images: &[],
        image: Some(image),
        link: None,
    }
}

pub static PROJECT_ASSETS: &AssetTable = &[
    (
        "poc-mvp",
        &[
            gallery(
                &["/img/poc-mvp/agent-smith-1.png", "/img/poc-mvp/agent-smith-2.png"],
                Some("https://agentsmith.world"),
            ),
            gallery(
                &["/img/poc-mvp/property-mgnt-1.png", "/img/poc-mvp/property-mgnt-2.png"],
                None,
            ),
            gallery(
                &[
                    "/img/poc-mvp/night-club-1.png",
                    "/img/poc-mvp/night-club-2.png",
                    "/img/poc-mvp/night-club-3.png",
                ],
                None,
            ),
        ],
    ),
    (
        "saas",
        &[
            gallery(
                &[
                    "/img/sass/hollynest%20(1).png",
                    "/img/sass/hollynest%20(2).png",
                    "/img/sass/hollynest%20(3).png",
                ],
                Some("https://hollynest.com"),
            ),
            gallery(
                &[
                    "/img/sass/paperclue%20(1).png",
                    "/img/sass/paperclue%20(2).png",
                    "/img/sass/paperclue%20(3).png",
                ],
                Some("https://paperclue.ai"),
            ),
            gallery(
                &["/img/sass/suisei%20(1).png", "/img/sass/suisei%20(2).png"],
                Some("https://suisei.ai"),
            ),
            gallery(
                &[
                    "/img/sass/ashpos%20(1).png",
                    "/img/sass/ashpos%20(2).png",
                    "/img/sass/ashpos%20(3).png",
                    "/img/sass/ashpos%20(4).png",
                ],
                Some("https://ashespos.ai"),
            ),
            gallery(
                &[
                    "/img/sass/voice-agent%20(1).png",
                    "/img/sass/voice-agent%20(2).png",
                    "/img/sass/voice-agent%20(3).png",
                    "/img/sass/voice-agent%20(4).png",
                ],
                Some("https://qcall.ai"),
            ),
        ],
    ),
    (
        "ml-solutions",
        &[
            single("/img/mlops/rakuten-ecommerce.png"),
            single("/img/mlops/time-series-forecasting.png"),
            single("/img/mlops/sales-prediction.png"),
            single("/img/mlops/sentiment-analysis.png"),
            single("/img/mlops/travel-recommendation.png"),
        ],
    ),
    (
        "automation",
        &[
            single("/img/automation/openai-transcribe.png"),
            gallery(
                &[
                    "/img/automation/n8n-rag/RAG_workflow.png",
                    "/img/automation/n8n-rag/screenshot_20250422_201446.png",
                    "/img/automation/n8n-rag/screenshot_20250422_201601.png",
                ],
                None,
            ),
            single("/img/automation/document-processing.png"),
        ],
    ),
    (
        "web-mobile",
        &[
            gallery(
                &[
                    "/img/web-mobile/design-library%20(1).png",
                    "/img/web-mobile/design-library%20(2).png",
                ],
                Some("https://design-library.jp/topic/spring"),
            ),
            gallery(
                &["/img/web-mobile/taprize%20(1).png", "/img/web-mobile/taprize%20(2).png"],
                Some("https://taprize.jp/"),
            ),
            gallery(
                &[
                    "/img/web-mobile/klook%20(1).png",
                    "/img/web-mobile/klook%20(2%20).png",
                    "/img/web-mobile/klook%20(3).png",
                ],
                Some("https://www.klook.com/"),
            ),
        ],
    ),
    (
        "devops",
        &[
            single("/img/devops/aws-automation.png"),
            single("/img/devops/llm_ops.png"),
        ],
    ),
];

pub fn assets_for(table: &AssetTable, category_id: &str) -> Option<&'static [ProjectAsset]> {
    table
        .iter()
        .find(|(id, _)| *id == category_id)
        .map(|(_, assets)| *assets)
}
