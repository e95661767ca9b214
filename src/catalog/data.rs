//! Built-in tool and synergy records.
//!
//! A curated snapshot of the top-tier tools; stands in for the remote
//! database whenever it is unreachable or too sparse to be worth showing.

use super::{Catalog, Category, ConnectionType, Synergy, Tool};

#[allow(clippy::too_many_arguments)]
fn tool(
	id: u32,
	name: &str,
	description: &str,
	category: Category,
	popularity: f64,
	connections: u32,
	monthly_users: u64,
	url: &str,
	rank: u32,
) -> Tool {
	Tool {
		id,
		name: name.to_string(),
		description: description.to_string(),
		category,
		popularity,
		connections,
		monthly_users,
		url: url.to_string(),
		rank,
	}
}

fn synergy(
	source: u32,
	target: u32,
	strength: f64,
	kind: ConnectionType,
	description: Option<&str>,
) -> Synergy {
	Synergy {
		source,
		target,
		strength,
		kind,
		description: description.map(str::to_string),
	}
}

/// Build the built-in catalog. Called once via [`Catalog::builtin`].
pub(super) fn builtin() -> Catalog {
	use Category::*;
	use ConnectionType::*;

	let tools = vec![
		tool(1, "ChatGPT", "OpenAI's conversational AI assistant", Nlp, 98.0, 45, 200_000_000, "https://chat.openai.com", 1),
		tool(2, "Bolt.new", "AI-powered full-stack web development platform", Coding, 95.0, 38, 2_000_000, "https://bolt.new", 2),
		tool(3, "Claude", "Anthropic's AI assistant for conversations and text", Nlp, 92.0, 42, 50_000_000, "https://claude.ai", 3),
		tool(4, "Cursor", "AI-powered code editor", Coding, 93.7, 35, 3_000_000, "https://cursor.sh", 4),
		tool(5, "Midjourney", "AI image generation platform", ComputerVision, 90.0, 40, 15_000_000, "https://midjourney.com", 5),
		tool(6, "Lovable", "AI website builder that generates full applications", Coding, 92.0, 33, 1_500_000, "https://lovable.dev", 6),
		tool(7, "DALL-E 2", "OpenAI's image generation model", ComputerVision, 88.0, 37, 8_000_000, "https://openai.com/dall-e-2", 7),
		tool(8, "V0 by Vercel", "AI UI generator for React components", Coding, 90.0, 31, 1_800_000, "https://v0.dev", 8),
		tool(9, "NotebookLM", "Google's AI research assistant for documents", Nlp, 88.0, 29, 3_000_000, "https://notebooklm.google.com", 9),
		tool(10, "Character.AI", "AI chatbots with distinct personalities", Nlp, 87.0, 36, 8_000_000, "https://character.ai", 10),
		tool(11, "Stable Diffusion", "Open-source image generation model", ComputerVision, 85.0, 34, 5_000_000, "https://stability.ai", 11),
		tool(12, "GitHub Copilot", "AI coding assistant", Coding, 88.0, 39, 10_000_000, "https://github.com/features/copilot", 12),
		tool(13, "ElevenLabs", "AI voice synthesis", Audio, 84.0, 28, 2_000_000, "https://elevenlabs.io", 13),
		tool(14, "Suno AI", "AI music generation from text prompts", Audio, 84.0, 26, 2_500_000, "https://suno.ai", 14),
		tool(15, "Runway ML", "AI video and image editing", Video, 82.0, 30, 1_800_000, "https://runwayml.com", 15),
		tool(16, "Poe", "AI chatbot platform by Quora with multiple models", Nlp, 85.0, 32, 5_000_000, "https://poe.com", 16),
		tool(17, "Luma AI", "AI 3D scene generation and video creation", ComputerVision, 83.0, 25, 1_000_000, "https://lumalabs.ai", 17),
		tool(18, "Jasper", "AI content writing platform", Nlp, 81.0, 27, 1_500_000, "https://jasper.ai", 18),
		tool(19, "Copy.ai", "AI copywriting tool", Nlp, 79.0, 24, 1_200_000, "https://copy.ai", 19),
		tool(20, "Perplexity", "AI-powered search engine", Nlp, 86.0, 33, 4_000_000, "https://perplexity.ai", 20),
	];

	let synergies = vec![
		// ChatGPT as a hub
		synergy(1, 3, 0.9, Complementary, Some("Both leading conversational AI assistants with different strengths")),
		synergy(1, 9, 0.8, Functional, Some("ChatGPT and NotebookLM both excel at research assistance")),
		synergy(1, 16, 0.85, Competitive, None),
		synergy(1, 18, 0.7, Functional, None),
		// Coding tools
		synergy(2, 4, 0.8, Complementary, Some("Full-stack development platform pairs well with AI-powered code editor")),
		synergy(2, 6, 0.9, Competitive, Some("Both are AI website builders competing in the same space")),
		synergy(2, 8, 0.85, Functional, Some("Bolt.new for full apps, V0 for React components - workflow integration")),
		synergy(4, 12, 0.9, Complementary, Some("Cursor editor works excellently with GitHub Copilot suggestions")),
		synergy(8, 12, 0.7, Functional, Some("V0 components can be enhanced with Copilot suggestions")),
		synergy(6, 8, 0.8, Competitive, Some("Lovable vs V0 - both generate web components")),
		// Image generation
		synergy(5, 7, 0.9, Competitive, Some("Leading image generation platforms with different approaches")),
		synergy(5, 11, 0.85, Competitive, Some("Midjourney vs Stable Diffusion - commercial vs open source")),
		synergy(7, 11, 0.8, Competitive, Some("DALL-E vs Stable Diffusion in AI image generation")),
		synergy(17, 5, 0.6, Functional, Some("Luma 3D generation works with Midjourney for textures")),
		// Conversational network
		synergy(3, 10, 0.7, Functional, Some("Claude and Character.AI both focus on conversational AI")),
		synergy(16, 10, 0.8, Complementary, Some("Poe platform includes Character.AI-style bots")),
		synergy(18, 19, 0.9, Competitive, Some("Both AI copywriting platforms targeting similar markets")),
		synergy(20, 1, 0.7, Functional, Some("Perplexity search complements ChatGPT conversations")),
		// Audio and video
		synergy(13, 14, 0.8, Complementary, Some("Voice synthesis pairs well with AI music generation")),
		synergy(15, 5, 0.6, Functional, Some("Runway video editing enhanced with Midjourney images")),
		synergy(15, 17, 0.7, Functional, None),
		// Cross-domain workflows
		synergy(2, 5, 0.5, Workflow, None),
		synergy(1, 13, 0.6, Workflow, Some("ChatGPT text can be converted to speech with ElevenLabs")),
		synergy(18, 5, 0.7, Workflow, None),
		synergy(19, 7, 0.6, Workflow, None),
		synergy(9, 20, 0.8, Functional, None),
	];

	Catalog { tools, synergies }
}
