use std::collections::HashSet;

/// Curated projects powering the hero marquee and prioritised in listings.
pub const FEATURED_PROJECT_IDS: &[&str] = &[
	"d1f39ca2-6c45-4423-a681-be45b47ec278",
	"502b0dbc-5169-4db6-8796-36a968a798fd",
	"f22a3d11-9c55-4d6f-98c3-b56230589def",
	"5b7f1fde-5642-4bfd-ab11-8b10c7c1ae1b",
	"1c57849c-ae23-400a-b9d5-6f909894ae86",
	"ba85310d-c82c-43c5-a42c-6479f8946b98",
	"a7e1c712-84a2-4457-8610-1cab7af37b16",
	"071a6e9b-08f9-4f65-9da9-3e8866731439",
	"ee2a37a9-cf06-4742-9d99-30921282216c",
	"47b08857-89fe-4016-8cfe-e057c2857449",
	"00b21789-6562-43bd-a75e-f2be48590853",
	"84904055-cb72-407f-996a-d7aafe287372",
	"f5fb9fa0-e1be-4fd9-b85d-c2dfa2743ef2",
	"eb131b7d-3ab9-44d4-b3f0-ef02d08b8379",
	"4a3718a7-fcef-4a1d-b631-a97c4cd03b8c",
	"8d0d1cc3-af7e-48ab-aa22-bef4ede008df",
	"eb80b316-cb0e-4e08-9885-f86ecf34a8e0",
	"8df27359-f05d-439b-8592-ca1b61cf049c",
	"8563314d-f31d-4e5a-a372-915a4f11518f",
	"81073086-5b7a-45fe-a629-5b201c3159de",
	"0f2ecfe3-1212-4157-9176-aeeb4204294f",
	"00afa40f-f1a7-4cb3-a979-13c501ae9b17",
	"1b1fedb8-3e97-4288-91e8-7a0c39e5be66",
	"5cec890e-fc90-48d0-b7eb-011b6a0dc13b",
	"c95cdd9c-a151-4b3b-b43b-8f023e77f634",
];

/// Multichain projects that also support Starknet; listed after native ones.
pub const MULTICHAIN_PROJECT_IDS: &[&str] = &[
	"d05225aa-d6d7-4c16-b9f1-80f166d72ee8",
	"6175cd83-81fb-48d0-9f56-80cea421aa1c",
	"2431f5bb-9a1c-418d-9bd7-a46afdfe6f53",
	"337960f1-a597-42de-a79b-b210ddd9cd88",
	"c41a169e-7158-46ac-855f-6ddb43ece9ba",
	"babbdef0-32ae-4fe4-8176-bd80a8180f5b",
	"49982c0a-e7c1-407e-9c89-a3ec5218c061",
	"09f0b163-c62a-4fde-b30e-758915aefd51",
	"53df446b-6fdc-42b0-9afc-6cdfbacbad32",
	"0db80119-886c-42b8-bbb1-e2a0099d4fa0",
	"b3de3519-2dbe-404a-ac45-dbe149322c10",
	"3eb8feb6-5bd1-4760-ab04-f969294b8540",
	"dd840ca2-7f31-4d08-a2f5-0903c9550f5d",
	"1d211d22-a83c-407f-aabe-9f34081048b4",
	"fc905a5a-38ed-42ec-84ae-d8810af02961",
	"d63076b0-5b81-4892-b123-2b1961b9d42c",
	"a05c3e70-29e2-4b8a-a143-bd873f84b152",
	"db7e17a6-0be0-402f-b7ba-703a48217879",
	"f0f90980-e14e-43c4-b50b-2c1c6150f345",
	"8cef1635-abd3-42cd-9e25-cab368f32642",
	"3a241c3b-1234-4fea-a6f2-51549c452db5",
	"83689aab-7a0d-46b8-948d-a71d24c6423f",
	"700f7250-66bc-4d46-8393-d7b5d30ca7b6",
	"99c4de9e-4e82-4268-a734-1aed4854d1f5",
	"41b4285a-2f2b-471d-bb8b-61e747a8cbdc",
	"b6712cb3-163a-412e-863e-5a72ff9ac0ec",
	"abb6033b-c8b6-4e4d-b030-365d2b523a9a",
	"9bc2502d-3eba-4aaa-b585-b308fa0d57c2",
	"08271a68-84cf-4467-9b66-a5d9dfaea20d",
	"b74fbad2-1348-4649-a760-1280d7672a50",
	"ee574078-7642-4bd9-8a30-f7c0031d43ab",
	"cbc03d65-c0db-4295-b7b1-616edea1dd91",
	"b839f41f-991f-43b1-a37c-8a4b44a92093",
	"14a6656a-32fe-4903-8a52-f5c8fbe8793f",
	"aa053a17-af46-4587-9857-a55ecb9f26bc",
	"f02bca5f-5e46-4833-b1ea-8fb127e18651",
	"d468232c-3f34-4eba-bd2f-a52d3475e235",
	"a710c64f-8f14-4333-b791-8efee04fcc18",
	"02555c59-fbb7-4fee-9f9a-0b2d541e1abb",
	"db9fe341-da55-44bc-862f-12409531a9f9",
	"6b4b74bb-3880-47a8-a0fd-f4b96f1a7509",
	"3f68f506-8d2b-473d-b033-7238e5ab5c1f",
	"518b5d46-1ac9-452e-99c8-80fa5e66a0cb",
	"b5d3d5b0-9c9b-449d-b6fa-7a07bafb4a93",
	"70fbf6b2-2361-4a45-b732-dc821ee03ee4",
	"629c7de2-576d-480b-9395-08a25cfc150c",
	"ea017412-a9fc-41a3-aa05-a908fa9c2604",
	"be66566b-2837-41da-ae92-b0a1566ab179",
	"5931a7e3-8760-457a-a4bc-c1ffc51de175",
	"442680e5-a275-4160-a953-3456cee39e48",
	"5a33f51e-b28e-40d3-850a-6baf1d7bfc5f",
	"ca6bbf27-4302-4ada-9ec4-ed6fe9d8304a",
	"c18c7e63-43bb-4870-9c20-95554a57a7cf",
	"ca3242b9-b196-47a8-a3da-84912614732a",
	"a968a6ff-0782-4f1e-8f90-d9d2c701d7fa",
	"08e527e0-ed6c-486b-975e-dd7702b989ad",
	"03f6f911-c24f-411f-9b31-1bc113ec7a0c",
	"a4b326b6-ceed-4b13-bc8e-36180f68111b",
	"01babbb2-b6d9-4585-b795-2e388123ffd8",
	"d18f47a2-8969-4f22-bc56-cae2568d7cc6",
	"0d63509e-a328-46c1-8e9f-716b21753e9a",
	"2c84583e-6c4e-4ca4-933d-1352df79b0af",
	"24990877-03e8-4059-a886-c24ca1bfe93c",
	"c3b640d1-a808-4c48-9b9b-7ecc78548a89",
	"09e0f50b-6f2a-43ef-88ff-8f84ee253453",
	"32ba3cd1-4eb2-4b64-b784-257df9a90909",
	"3969b66d-5ad6-477f-938a-a785efe97a7d",
	"fafd7585-3012-44ba-a736-bfca880fa25d",
	"091e1603-3823-4750-894f-fdc9cd4a752e",
	"769f5ad6-fca5-4f98-9002-c4971ab65343",
	"37962c42-841e-461b-a300-8acf4ae183c4",
	"76b4443d-e768-4e78-ada5-63674aa4896b",
	"97a37caf-7345-49a2-b296-3a9f845f2e2d",
	"e710e02f-820f-4b70-983c-2e3b6f0d2cad",
	"4ab40ac3-4fc6-4b11-bb1f-8ec30d07d1c0",
	"ab4517ca-14a6-4a5e-acb9-849954a0af4d",
];

/// Coarse priority bucket applied before follower counts when sorting by
/// popularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
	Featured,
	Native,
	Multichain,
}

/// Read-only lookup of curated project ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CuratedSets {
	featured: HashSet<String>,
	multichain: HashSet<String>,
}

impl CuratedSets {
	/// Build sets from arbitrary id lists.
	#[must_use]
	pub fn new<F, M, S, T>(featured: F, multichain: M) -> Self
	where
		F: IntoIterator<Item = S>,
		M: IntoIterator<Item = T>,
		S: Into<String>,
		T: Into<String>,
	{
		Self {
			featured: featured.into_iter().map(Into::into).collect(),
			multichain: multichain.into_iter().map(Into::into).collect(),
		}
	}

	/// The curated lists shipped with the directory.
	#[must_use]
	pub fn builtin() -> Self {
		Self::new(
			FEATURED_PROJECT_IDS.iter().copied(),
			MULTICHAIN_PROJECT_IDS.iter().copied(),
		)
	}

	#[must_use]
	pub fn is_featured(&self, id: &str) -> bool {
		self.featured.contains(id)
	}

	#[must_use]
	pub fn is_multichain(&self, id: &str) -> bool {
		self.multichain.contains(id)
	}

	/// Featured membership wins when an id appears in both sets.
	#[must_use]
	pub fn tier_of(&self, id: &str) -> Tier {
		if self.is_featured(id) {
			Tier::Featured
		} else if self.is_multichain(id) {
			Tier::Multichain
		} else {
			Tier::Native
		}
	}

	#[must_use]
	pub fn featured_len(&self) -> usize {
		self.featured.len()
	}

	#[must_use]
	pub fn multichain_len(&self) -> usize {
		self.multichain.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builtin_sets_are_disjoint() {
		let sets = CuratedSets::builtin();
		assert_eq!(sets.featured_len(), FEATURED_PROJECT_IDS.len());
		assert_eq!(sets.multichain_len(), MULTICHAIN_PROJECT_IDS.len());
		for id in FEATURED_PROJECT_IDS {
			assert_eq!(sets.tier_of(id), Tier::Featured);
		}
		for id in MULTICHAIN_PROJECT_IDS {
			assert_eq!(sets.tier_of(id), Tier::Multichain);
		}
	}

	#[test]
	fn featured_takes_priority_over_multichain() {
		let sets = CuratedSets::new(["both"], ["both", "chain"]);
		assert_eq!(sets.tier_of("both"), Tier::Featured);
		assert_eq!(sets.tier_of("chain"), Tier::Multichain);
		assert_eq!(sets.tier_of("native"), Tier::Native);
	}

	#[test]
	fn tiers_order_featured_native_multichain() {
		assert!(Tier::Featured < Tier::Native);
		assert!(Tier::Native < Tier::Multichain);
	}
}
